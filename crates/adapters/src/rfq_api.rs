//! HTTP client for the RFQ quoter API
//!
//! Relayers post standing quotes to the API; tickers and per-amount quotes are
//! derived locally from the `/quotes` listing. Requests are not retried.

use async_trait::async_trait;
use bridge_core::rfq::{best_amount_out, tickers_from_quotes, ChainToken, FastBridgeQuote};
use bridge_core::{ChainId, Error, QuoterApi, Result, Ticker};
use ethers::types::{Address, U256};
use ethers::utils::to_checksum;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

/// RFQ API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RfqApiConfig {
    /// Base URL of the quoter API
    pub base_url: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RfqApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://rfq-api.omnirpc.io".to_string(),
            timeout_ms: 3000,
        }
    }
}

/// Quote as served by `GET /quotes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RfqApiQuote {
    pub origin_chain_id: ChainId,
    pub origin_token_addr: String,
    pub dest_chain_id: ChainId,
    pub dest_token_addr: String,
    /// Decimal string
    pub dest_amount: String,
    /// Decimal string
    pub max_origin_amount: String,
    /// Decimal string
    pub fixed_fee: String,
    #[serde(default)]
    pub relayer_addr: String,
    #[serde(default)]
    pub updated_at: String,
}

fn parse_address(field: &str, value: &str) -> Result<Address> {
    Address::from_str(value)
        .map_err(|e| Error::QuoterApi(format!("invalid {} {:?}: {}", field, value, e)))
}

fn parse_amount(field: &str, value: &str) -> Result<U256> {
    U256::from_dec_str(value)
        .map_err(|e| Error::QuoterApi(format!("invalid {} {:?}: {:?}", field, value, e)))
}

impl TryFrom<RfqApiQuote> for FastBridgeQuote {
    type Error = Error;

    fn try_from(quote: RfqApiQuote) -> Result<Self> {
        let relayer_addr = if quote.relayer_addr.is_empty() {
            Address::zero()
        } else {
            parse_address("relayer_addr", &quote.relayer_addr)?
        };

        Ok(FastBridgeQuote {
            ticker: Ticker::new(
                ChainToken::new(
                    quote.origin_chain_id,
                    parse_address("origin_token_addr", &quote.origin_token_addr)?,
                ),
                ChainToken::new(
                    quote.dest_chain_id,
                    parse_address("dest_token_addr", &quote.dest_token_addr)?,
                ),
            ),
            dest_amount: parse_amount("dest_amount", &quote.dest_amount)?,
            max_origin_amount: parse_amount("max_origin_amount", &quote.max_origin_amount)?,
            fixed_fee: parse_amount("fixed_fee", &quote.fixed_fee)?,
            relayer_addr,
            updated_at: quote.updated_at,
        })
    }
}

/// Converts API quotes, dropping entries that do not parse
pub fn collect_quotes(quotes: Vec<RfqApiQuote>) -> Vec<FastBridgeQuote> {
    quotes
        .into_iter()
        .filter_map(|quote| match FastBridgeQuote::try_from(quote) {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!("Skipping malformed RFQ quote: {}", e);
                None
            }
        })
        .collect()
}

/// [`QuoterApi`] backed by the RFQ quoter HTTP API
#[derive(Debug, Clone)]
pub struct RfqApiClient {
    client: Client,
    config: RfqApiConfig,
}

impl RfqApiClient {
    pub fn new(config: RfqApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("bridge-router/0.1"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::QuoterApi(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RfqApiConfig {
        &self.config
    }

    fn quotes_url(&self) -> String {
        format!("{}/quotes", self.config.base_url.trim_end_matches('/'))
    }

    /// Fetches quotes matching the given query filters
    pub async fn get_quotes(&self, filters: &[(&str, String)]) -> Result<Vec<FastBridgeQuote>> {
        let url = self.quotes_url();
        debug!("Fetching RFQ quotes from {} with {:?}", url, filters);

        let response = self
            .client
            .get(&url)
            .query(filters)
            .send()
            .await
            .map_err(|e| Error::QuoterApi(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::QuoterApi(format!(
                "quotes endpoint returned status {}",
                response.status()
            )));
        }

        let quotes: Vec<RfqApiQuote> = response
            .json()
            .await
            .map_err(|e| Error::QuoterApi(format!("invalid quotes response: {}", e)))?;

        Ok(collect_quotes(quotes))
    }

    /// Every quote currently posted to the API
    pub async fn get_all_quotes(&self) -> Result<Vec<FastBridgeQuote>> {
        self.get_quotes(&[]).await
    }
}

fn chain_pair_filters(origin_chain_id: ChainId, dest_chain_id: ChainId) -> Vec<(&'static str, String)> {
    vec![
        ("origin_chain_id", origin_chain_id.to_string()),
        ("dest_chain_id", dest_chain_id.to_string()),
    ]
}

fn ticker_filters(ticker: &Ticker) -> Vec<(&'static str, String)> {
    let mut filters =
        chain_pair_filters(ticker.origin_token.chain_id, ticker.dest_token.chain_id);
    filters.push(("origin_token_addr", to_checksum(&ticker.origin_token.token, None)));
    filters.push(("dest_token_addr", to_checksum(&ticker.dest_token.token, None)));
    filters
}

#[async_trait]
impl QuoterApi for RfqApiClient {
    async fn get_tickers(
        &self,
        origin_chain_id: ChainId,
        dest_chain_id: ChainId,
    ) -> Result<Vec<Ticker>> {
        let quotes = self
            .get_quotes(&chain_pair_filters(origin_chain_id, dest_chain_id))
            .await?;
        Ok(tickers_from_quotes(&quotes, origin_chain_id, dest_chain_id))
    }

    async fn get_quote(&self, ticker: &Ticker, amount: U256) -> Result<U256> {
        let quotes = self.get_quotes(&ticker_filters(ticker)).await?;
        Ok(best_amount_out(&quotes, ticker, amount))
    }
}
