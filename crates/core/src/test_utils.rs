//! Shared fixtures for unit tests

use crate::domain::{ChainId, ChainProvider};
use crate::rfq::{ChainToken, QuoterApi, Ticker};
use async_trait::async_trait;
use ethers::providers::{Http, Provider};
use ethers::types::{Address, U256};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const USDC_OPTIMISM: &str = "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85";
pub const USDC_POLYGON: &str = "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359";
pub const USDC_ARBITRUM: &str = "0xaf88d065e77c8cC2239327C5EDb3A432268e5831";

pub fn addr(s: &str) -> Address {
    Address::from_str(s).unwrap()
}

pub fn provider() -> Arc<Provider<Http>> {
    Arc::new(Provider::<Http>::try_from("http://localhost:8545").unwrap())
}

pub fn chain_providers(chain_ids: &[ChainId]) -> Vec<ChainProvider> {
    chain_ids
        .iter()
        .map(|chain_id| ChainProvider::new(*chain_id, provider()))
        .collect()
}

pub fn ticker(origin: ChainId, origin_token: Address, dest: ChainId, dest_token: Address) -> Ticker {
    Ticker::new(
        ChainToken::new(origin, origin_token),
        ChainToken::new(dest, dest_token),
    )
}

/// In-memory quoter with a fixed ticker list and configurable latency.
///
/// Quote calls are numbered in the order they start; latency and fixed
/// quotes are keyed by that number.
#[derive(Default)]
pub struct MockQuoter {
    pub tickers: Vec<Ticker>,

    /// Destination amount = amount * numerator / denominator
    pub rate: Option<(u64, u64)>,

    /// Latency of the n-th quote call
    pub delays: Vec<Duration>,

    /// Quote returned by the n-th call, overriding the rate
    pub fixed_quotes: HashMap<usize, U256>,

    pub ticker_error: Option<String>,
    pub quote_error: Option<String>,

    pub ticker_calls: AtomicUsize,
    pub quote_calls: AtomicUsize,

    /// Call numbers in completion order
    pub completed: Mutex<Vec<usize>>,
}

impl MockQuoter {
    pub fn with_tickers(tickers: Vec<Ticker>) -> Self {
        Self {
            tickers,
            ..Default::default()
        }
    }
}

#[async_trait]
impl QuoterApi for MockQuoter {
    async fn get_tickers(
        &self,
        _origin_chain_id: ChainId,
        _dest_chain_id: ChainId,
    ) -> crate::Result<Vec<Ticker>> {
        self.ticker_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.ticker_error {
            return Err(crate::Error::QuoterApi(message.clone()));
        }
        Ok(self.tickers.clone())
    }

    async fn get_quote(&self, _ticker: &Ticker, amount: U256) -> crate::Result<U256> {
        let call = self.quote_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(call) {
            tokio::time::sleep(*delay).await;
        }
        self.completed.lock().unwrap().push(call);

        if let Some(message) = &self.quote_error {
            return Err(crate::Error::QuoterApi(message.clone()));
        }
        if let Some(fixed) = self.fixed_quotes.get(&call) {
            return Ok(*fixed);
        }
        Ok(match self.rate {
            Some((numerator, denominator)) => {
                amount * U256::from(numerator) / U256::from(denominator)
            }
            None => amount,
        })
    }
}
