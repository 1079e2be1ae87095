pub mod api;
pub mod fast_bridge;
pub mod quote;
pub mod ticker;

pub use api::QuoterApi;
pub use fast_bridge::FastBridge;
pub use quote::{apply_quote, best_amount_out, tickers_from_quotes, FastBridgeQuote};
pub use ticker::{ChainToken, Ticker};

use crate::constants::{median_time_rfq, AddressMap, FAST_BRIDGE_ADDRESS_MAP, ONE_HOUR, TEN_MINUTES};
use crate::domain::{
    chain_name, create_no_swap_query, BridgeRoute, BridgeToken, ChainId, ChainProvider,
    DefaultPeriods, FeeData, Query,
};
use crate::module::{Module, ModuleSet};
use async_trait::async_trait;
use ethers::providers::{Http, Provider};
use ethers::types::{Address, U256};
use futures::future::try_join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Route discovery over the FastBridge request-for-quote market.
///
/// Relayers publish quotes off-chain; the FastBridge contract on each chain
/// only settles them. Routes never swap on either leg: the user bridges the
/// ticker's origin token and receives the ticker's destination token.
pub struct FastBridgeSet {
    fast_bridges: HashMap<ChainId, FastBridge>,
    providers: HashMap<ChainId, Arc<Provider<Http>>>,
    quoter: Arc<dyn QuoterApi>,
}

impl FastBridgeSet {
    pub const BRIDGE_MODULE_NAME: &'static str = "SynapseRFQ";
    pub const ALL_EVENTS: [&'static str; 2] = ["BridgeRequestedEvent", "BridgeRelayedEvent"];

    /// Binds every chain with a known FastBridge deployment
    pub fn new(chains: Vec<ChainProvider>, quoter: Arc<dyn QuoterApi>) -> Self {
        Self::with_address_map(chains, &FAST_BRIDGE_ADDRESS_MAP, quoter)
    }

    /// Binds chains using a caller-supplied deployment table. Chains missing
    /// from the table are skipped.
    pub fn with_address_map(
        chains: Vec<ChainProvider>,
        addresses: &AddressMap,
        quoter: Arc<dyn QuoterApi>,
    ) -> Self {
        let mut fast_bridges = HashMap::new();
        let mut providers = HashMap::new();

        for ChainProvider { chain_id, provider } in chains {
            let Some(address) = addresses.get(&chain_id) else {
                debug!("No FastBridge deployed on {}, skipping", chain_name(chain_id));
                continue;
            };
            fast_bridges.insert(
                chain_id,
                FastBridge::new(chain_id, Arc::clone(&provider), *address),
            );
            providers.insert(chain_id, provider);
        }

        info!("FastBridgeSet initialized on {} chains", fast_bridges.len());

        Self {
            fast_bridges,
            providers,
            quoter,
        }
    }

    /// Provider retained for a supported chain
    pub fn provider(&self, chain_id: ChainId) -> Option<&Arc<Provider<Http>>> {
        self.providers.get(&chain_id)
    }

    /// Chains with a FastBridge binding, in ascending order
    pub fn chain_ids(&self) -> Vec<ChainId> {
        let mut chain_ids: Vec<ChainId> = self.fast_bridges.keys().copied().collect();
        chain_ids.sort_unstable();
        chain_ids
    }

    /// Tickers the RFQ market serves between two chains
    async fn get_supported_tickers(
        &self,
        origin_chain_id: ChainId,
        dest_chain_id: ChainId,
    ) -> crate::Result<Vec<Ticker>> {
        if origin_chain_id == dest_chain_id {
            return Err(crate::Error::SameChain(origin_chain_id));
        }
        self.quoter.get_tickers(origin_chain_id, dest_chain_id).await
    }

    /// Destination amount for bridging `amount` through `ticker`
    async fn get_quote(&self, ticker: &Ticker, amount: U256) -> crate::Result<U256> {
        if !ticker.is_cross_chain() {
            error!("Quoter returned same chain ticker {}", ticker);
            return Err(crate::Error::SameChain(ticker.origin_token.chain_id));
        }
        self.quoter.get_quote(ticker, amount).await
    }
}

#[async_trait]
impl ModuleSet for FastBridgeSet {
    fn bridge_module_name(&self) -> &str {
        Self::BRIDGE_MODULE_NAME
    }

    fn all_events(&self) -> &[&'static str] {
        &Self::ALL_EVENTS
    }

    fn get_module(&self, chain_id: ChainId) -> Option<&dyn Module> {
        self.fast_bridges
            .get(&chain_id)
            .map(|bridge| bridge as &dyn Module)
    }

    fn get_estimated_time(&self, chain_id: ChainId) -> crate::Result<u64> {
        median_time_rfq(chain_id).ok_or(crate::Error::MissingEstimatedTime(chain_id))
    }

    fn get_default_periods(&self) -> DefaultPeriods {
        DefaultPeriods {
            origin_period: TEN_MINUTES,
            dest_period: ONE_HOUR,
        }
    }

    async fn get_bridge_routes(
        &self,
        origin_chain_id: ChainId,
        dest_chain_id: ChainId,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
    ) -> crate::Result<Vec<BridgeRoute>> {
        let all_tickers = self
            .get_supported_tickers(origin_chain_id, dest_chain_id)
            .await?;
        let ticker_count = all_tickers.len();

        // Origin swaps are not supported, so only tickers starting from
        // token_in qualify
        let origin_routes: Vec<(Ticker, Query)> = all_tickers
            .into_iter()
            .filter(|ticker| {
                ticker.dest_token.token == token_out && ticker.origin_token.token == token_in
            })
            .map(|ticker| (ticker, create_no_swap_query(token_in, amount_in)))
            .filter(|(_, origin_query)| origin_query.is_routable())
            .collect();

        debug!(
            "{} of {} tickers eligible for {} -> {}",
            origin_routes.len(),
            ticker_count,
            chain_name(origin_chain_id),
            chain_name(dest_chain_id)
        );

        let dest_amounts = try_join_all(
            origin_routes
                .iter()
                .map(|(ticker, origin_query)| self.get_quote(ticker, origin_query.min_amount_out)),
        )
        .await?;

        let routes: Vec<BridgeRoute> = origin_routes
            .into_iter()
            .zip(dest_amounts)
            .filter_map(|((ticker, origin_query), amount_out)| {
                if amount_out.is_zero() {
                    debug!("No relayer quote for {}", ticker);
                    return None;
                }
                Some(BridgeRoute {
                    origin_chain_id,
                    dest_chain_id,
                    bridge_token: BridgeToken {
                        symbol: ticker.symbol(),
                        token: ticker.dest_token.token,
                    },
                    origin_query,
                    // Swaps on the destination chain are not supported either
                    dest_query: create_no_swap_query(token_out, amount_out),
                    bridge_module_name: Self::BRIDGE_MODULE_NAME.to_string(),
                })
            })
            .collect();

        info!(
            "Found {} RFQ routes from {} to {}",
            routes.len(),
            chain_name(origin_chain_id),
            chain_name(dest_chain_id)
        );

        Ok(routes)
    }

    async fn get_fee_data(&self) -> crate::Result<FeeData> {
        // FastBridge does not expose its fee schedule on-chain yet
        Ok(FeeData::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::generate_address_map;
    use crate::test_utils::*;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn usdc_ticker() -> Ticker {
        ticker(10, addr(USDC_OPTIMISM), 137, addr(USDC_POLYGON))
    }

    fn rfq_set(quoter: MockQuoter) -> (FastBridgeSet, Arc<MockQuoter>) {
        let quoter = Arc::new(quoter);
        let addresses = generate_address_map(&[10, 137, 42161], Address::from_low_u64_be(0xfb), None);
        let set = FastBridgeSet::with_address_map(
            chain_providers(&[10, 137, 42161]),
            &addresses,
            quoter.clone(),
        );
        (set, quoter)
    }

    #[test]
    fn test_construction_skips_chains_without_deployment() {
        let set = FastBridgeSet::new(
            chain_providers(&[1, 10, 137, 56]),
            Arc::new(MockQuoter::default()),
        );

        assert_eq!(set.chain_ids(), vec![1, 10]);
        assert!(set.get_module(1).is_some());
        assert!(set.get_module(137).is_none());
        assert!(set.provider(10).is_some());
        assert!(set.provider(56).is_none());
        assert!(matches!(
            set.get_existing_module(137),
            Err(crate::Error::ModuleNotFound(137))
        ));
    }

    #[test]
    fn test_module_binding() {
        let set = FastBridgeSet::new(chain_providers(&[42161]), Arc::new(MockQuoter::default()));
        let module = set.get_existing_module(42161).unwrap();
        assert_eq!(module.chain_id(), 42161);
        assert_eq!(module.address(), FAST_BRIDGE_ADDRESS_MAP[&42161]);
        assert_eq!(set.bridge_module_name(), "SynapseRFQ");
        assert_eq!(set.all_events(), &["BridgeRequestedEvent", "BridgeRelayedEvent"]);
    }

    #[test]
    fn test_estimated_time() {
        let (set, _) = rfq_set(MockQuoter::default());
        assert_eq!(set.get_estimated_time(10).unwrap(), 30);
        assert_eq!(set.get_estimated_time(1).unwrap(), 24);
        assert!(matches!(
            set.get_estimated_time(137),
            Err(crate::Error::MissingEstimatedTime(137))
        ));
    }

    #[test]
    fn test_default_periods() {
        let (set, _) = rfq_set(MockQuoter::default());
        let periods = set.get_default_periods();
        assert_eq!(periods.origin_period, 600);
        assert_eq!(periods.dest_period, 3600);
    }

    #[tokio::test]
    async fn test_fee_data_is_zero() {
        let (set, _) = rfq_set(MockQuoter::default());
        let fee = set.get_fee_data().await.unwrap();
        assert!(fee.fee_amount.is_zero());
        assert_eq!(fee.fee_config, Default::default());
    }

    #[tokio::test]
    async fn test_same_chain_is_rejected() {
        let (set, quoter) = rfq_set(MockQuoter::with_tickers(vec![usdc_ticker()]));

        let result = set
            .get_bridge_routes(10, 10, addr(USDC_OPTIMISM), addr(USDC_OPTIMISM), U256::from(1u64))
            .await;

        assert!(matches!(result, Err(crate::Error::SameChain(10))));
        assert_eq!(quoter.ticker_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_matching_tickers_returns_empty() {
        let (set, quoter) = rfq_set(MockQuoter::default());

        let routes = set
            .get_bridge_routes(10, 137, addr(USDC_OPTIMISM), addr(USDC_POLYGON), U256::from(1u64))
            .await
            .unwrap();

        assert!(routes.is_empty());
        assert_eq!(quoter.quote_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_usdc_route() {
        let (set, _) = rfq_set(MockQuoter::with_tickers(vec![usdc_ticker()]));

        let routes = set
            .get_bridge_routes(
                10,
                137,
                addr(USDC_OPTIMISM),
                addr(USDC_POLYGON),
                U256::from(1_000_000u64),
            )
            .await
            .unwrap();

        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.origin_chain_id, 10);
        assert_eq!(route.dest_chain_id, 137);
        assert_eq!(route.origin_query.min_amount_out, U256::from(1_000_000u64));
        assert_eq!(route.origin_query.token_out, addr(USDC_OPTIMISM));
        assert_eq!(route.dest_query.min_amount_out, U256::from(1_000_000u64));
        assert_eq!(route.dest_query.token_out, addr(USDC_POLYGON));
        assert_eq!(route.bridge_token.symbol, usdc_ticker().symbol());
        assert_eq!(route.bridge_token.token, addr(USDC_POLYGON));
        assert_eq!(route.bridge_module_name, "SynapseRFQ");
        assert!(!route.origin_query.has_swap());
        assert!(!route.dest_query.has_swap());

        let decoded: Ticker = route.bridge_token.symbol.parse().unwrap();
        assert_eq!(decoded, usdc_ticker());
    }

    #[tokio::test]
    async fn test_token_match_ignores_address_case() {
        let (set, _) = rfq_set(MockQuoter::with_tickers(vec![usdc_ticker()]));

        let token_in = addr(&USDC_OPTIMISM.to_lowercase());
        let token_out = addr(&USDC_POLYGON.to_uppercase().replacen("0X", "0x", 1));
        let routes = set
            .get_bridge_routes(10, 137, token_in, token_out, U256::from(5u64))
            .await
            .unwrap();

        assert_eq!(routes.len(), 1);
    }

    #[tokio::test]
    async fn test_filters_tokens_and_zero_amounts() {
        let weth_op = Address::from_low_u64_be(0x4200);
        let weth_polygon = Address::from_low_u64_be(0x7ceb);
        let tickers = vec![
            usdc_ticker(),
            // wrong origin token
            ticker(10, weth_op, 137, addr(USDC_POLYGON)),
            // wrong destination token
            ticker(10, addr(USDC_OPTIMISM), 137, weth_polygon),
            usdc_ticker(),
        ];
        let (set, quoter) = rfq_set(MockQuoter::with_tickers(tickers));

        let routes = set
            .get_bridge_routes(10, 137, addr(USDC_OPTIMISM), addr(USDC_POLYGON), U256::from(100u64))
            .await
            .unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(quoter.quote_calls.load(Ordering::SeqCst), 2);

        let routes = set
            .get_bridge_routes(10, 137, addr(USDC_OPTIMISM), addr(USDC_POLYGON), U256::zero())
            .await
            .unwrap();
        assert!(routes.is_empty());
        assert_eq!(quoter.quote_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_route_order_follows_discovery_order() {
        let mut quoter = MockQuoter::with_tickers(vec![usdc_ticker(); 5]);
        // Earlier candidates answer last
        quoter.delays = (0..5u64).rev().map(|i| Duration::from_millis(i * 20)).collect();
        quoter.fixed_quotes = (0..5usize).map(|i| (i, U256::from(100 + i as u64))).collect();
        let (set, quoter) = rfq_set(quoter);

        let routes = set
            .get_bridge_routes(10, 137, addr(USDC_OPTIMISM), addr(USDC_POLYGON), U256::from(100u64))
            .await
            .unwrap();

        let amounts: Vec<U256> = routes.iter().map(|r| r.dest_query.min_amount_out).collect();
        let expected: Vec<U256> = (100..105u64).map(U256::from).collect();
        assert_eq!(amounts, expected);
        assert_eq!(*quoter.completed.lock().unwrap(), vec![4, 3, 2, 1, 0]);
    }

    #[tokio::test]
    async fn test_zero_quotes_are_dropped() {
        let mut quoter = MockQuoter::with_tickers(vec![usdc_ticker(); 3]);
        quoter.fixed_quotes = [(0, U256::from(7u64)), (1, U256::zero()), (2, U256::from(9u64))]
            .into_iter()
            .collect();
        let (set, _) = rfq_set(quoter);

        let routes = set
            .get_bridge_routes(10, 137, addr(USDC_OPTIMISM), addr(USDC_POLYGON), U256::from(10u64))
            .await
            .unwrap();

        let amounts: Vec<U256> = routes.iter().map(|r| r.dest_query.min_amount_out).collect();
        assert_eq!(amounts, vec![U256::from(7u64), U256::from(9u64)]);
    }

    #[tokio::test]
    async fn test_quoter_rate_is_applied() {
        let mut quoter = MockQuoter::with_tickers(vec![usdc_ticker()]);
        quoter.rate = Some((999, 1000));
        let (set, _) = rfq_set(quoter);

        let routes = set
            .get_bridge_routes(10, 137, addr(USDC_OPTIMISM), addr(USDC_POLYGON), U256::from(1_000_000u64))
            .await
            .unwrap();

        assert_eq!(routes[0].origin_query.min_amount_out, U256::from(1_000_000u64));
        assert_eq!(routes[0].dest_query.min_amount_out, U256::from(999_000u64));
    }

    #[tokio::test]
    async fn test_ticker_registry_error_is_propagated() {
        let mut quoter = MockQuoter::default();
        quoter.ticker_error = Some("registry unavailable".to_string());
        let (set, _) = rfq_set(quoter);

        let err = set
            .get_bridge_routes(10, 137, addr(USDC_OPTIMISM), addr(USDC_POLYGON), U256::from(1u64))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Quoter API error: registry unavailable");
    }

    #[tokio::test]
    async fn test_quote_error_is_propagated() {
        let mut quoter = MockQuoter::with_tickers(vec![usdc_ticker(); 2]);
        quoter.quote_error = Some("quote timeout".to_string());
        let (set, _) = rfq_set(quoter);

        let err = set
            .get_bridge_routes(10, 137, addr(USDC_OPTIMISM), addr(USDC_POLYGON), U256::from(1u64))
            .await
            .unwrap_err();

        assert!(matches!(err, crate::Error::QuoterApi(ref m) if m == "quote timeout"));
    }

    #[tokio::test]
    async fn test_same_chain_ticker_fails_hard() {
        // A corrupted registry entry that still matches the requested tokens
        let corrupted = ticker(10, addr(USDC_OPTIMISM), 10, addr(USDC_POLYGON));
        let (set, quoter) = rfq_set(MockQuoter::with_tickers(vec![usdc_ticker(), corrupted]));

        let result = set
            .get_bridge_routes(10, 137, addr(USDC_OPTIMISM), addr(USDC_POLYGON), U256::from(1u64))
            .await;

        assert!(matches!(result, Err(crate::Error::SameChain(10))));
        assert_eq!(quoter.quote_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_finalize_bridge_route() {
        let arb_to_op = ticker(42161, addr(USDC_ARBITRUM), 10, addr(USDC_OPTIMISM));
        let (set, _) = rfq_set(MockQuoter::with_tickers(vec![arb_to_op]));
        let route = set
            .get_bridge_routes(42161, 10, addr(USDC_ARBITRUM), addr(USDC_OPTIMISM), U256::from(50u64))
            .await
            .unwrap()
            .remove(0);

        let quote = set
            .finalize_bridge_route(&route, Some(U256::from(1_700_000_000u64)))
            .await
            .unwrap();

        assert_eq!(quote.router_address, Address::from_low_u64_be(0xfb));
        assert_eq!(quote.max_amount_out, U256::from(50u64));
        assert_eq!(quote.estimated_time, 30);
        assert_eq!(quote.origin_query.deadline, U256::from(1_700_000_000u64));
        assert!(quote.dest_query.deadline < U256::MAX);
        assert!(quote.dest_query.deadline > quote.origin_query.deadline);
        assert_eq!(quote.dest_query.min_amount_out, route.dest_query.min_amount_out);
        assert!(quote.fee_amount.is_zero());
        assert_eq!(quote.bridge_module_name, "SynapseRFQ");
    }

    #[tokio::test]
    async fn test_finalize_requires_origin_module_and_estimate() {
        let (set, _) = rfq_set(MockQuoter::with_tickers(vec![usdc_ticker()]));
        let mut route = set
            .get_bridge_routes(10, 137, addr(USDC_OPTIMISM), addr(USDC_POLYGON), U256::from(5u64))
            .await
            .unwrap()
            .remove(0);

        // 137 has a module in this set but no latency estimate
        route.origin_chain_id = 137;
        assert!(matches!(
            set.finalize_bridge_route(&route, None).await,
            Err(crate::Error::MissingEstimatedTime(137))
        ));

        route.origin_chain_id = 1;
        assert!(matches!(
            set.finalize_bridge_route(&route, None).await,
            Err(crate::Error::ModuleNotFound(1))
        ));
    }
}
