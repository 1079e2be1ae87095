pub mod config;
pub mod constants;
pub mod domain;
pub mod module;
pub mod rfq;
pub mod router;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::RouterConfig;
pub use domain::{BridgeQuote, BridgeRoute, BridgeToken, ChainId, ChainProvider, Query};
pub use module::{Module, ModuleSet};
pub use rfq::{FastBridge, FastBridgeSet, QuoterApi, Ticker};
pub use router::BridgeRouter;

/// Core result type for route discovery
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Same chain swaps are not supported: chain {0}")]
    SameChain(ChainId),

    #[error("No estimated time for chain {0}")]
    MissingEstimatedTime(ChainId),

    #[error("No module found for chain {0}")]
    ModuleNotFound(ChainId),

    #[error("Invalid ticker: {0}")]
    InvalidTicker(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Quoter API error: {0}")]
    QuoterApi(String),

    #[error("Timed out after {0}ms")]
    Timeout(u64),

    #[error("No route found from chain {origin} to chain {dest}")]
    NoRouteFound { origin: ChainId, dest: ChainId },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
