use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Route aggregator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Upper bound for a single module set's route discovery, in milliseconds
    pub timeout_ms: u64,

    /// Drop quotes whose destination amount is zero
    pub skip_zero_quotes: bool,
}

impl RouterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            skip_zero_quotes: true,
        }
    }
}
