use crate::domain::chains::{ChainId, SupportedChain};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const TEN_MINUTES: u64 = 10 * 60;
pub const ONE_HOUR: u64 = 60 * 60;

/// Median time in seconds for an RFQ bridge originating on a chain
pub static MEDIAN_TIME_RFQ: Lazy<HashMap<ChainId, u64>> = Lazy::new(|| {
    HashMap::from([
        (SupportedChain::Ethereum.as_u64(), 24),
        (SupportedChain::Optimism.as_u64(), 30),
        (SupportedChain::Base.as_u64(), 30),
        (SupportedChain::Arbitrum.as_u64(), 30),
    ])
});

pub fn median_time_rfq(chain_id: ChainId) -> Option<u64> {
    MEDIAN_TIME_RFQ.get(&chain_id).copied()
}
