use super::ticker::Ticker;
use crate::domain::ChainId;
use async_trait::async_trait;
use ethers::types::U256;

/// Client for the off-chain RFQ market.
///
/// Implementations own their retry and backoff policy; errors they return
/// reach the caller of route discovery unchanged.
#[async_trait]
pub trait QuoterApi: Send + Sync {
    /// Tickers currently served from `origin_chain_id` to `dest_chain_id`
    async fn get_tickers(
        &self,
        origin_chain_id: ChainId,
        dest_chain_id: ChainId,
    ) -> crate::Result<Vec<Ticker>>;

    /// Destination amount relayers offer for `amount` of the ticker's origin
    /// token; zero when nobody can fill it
    async fn get_quote(&self, ticker: &Ticker, amount: U256) -> crate::Result<U256>;
}
