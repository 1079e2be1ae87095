//! Protocol-agnostic capability traits.
//!
//! A [`Module`] is one bridge protocol's deployment on a single chain. A
//! [`ModuleSet`] groups a protocol's modules across every chain it supports
//! and exposes route discovery in a shape shared by all protocols, so that an
//! aggregator can hold any number of them as trait objects.

use crate::domain::{
    apply_deadline, calculate_deadline, BridgeQuote, BridgeRoute, ChainId, DefaultPeriods, FeeData,
};
use async_trait::async_trait;
use ethers::providers::{Http, Provider};
use ethers::types::{Address, U256};
use std::sync::Arc;
use tracing::debug;

/// A protocol's contract binding on a single chain
pub trait Module: Send + Sync + std::fmt::Debug {
    /// Chain the contract is deployed on
    fn chain_id(&self) -> ChainId;

    /// Address of the protocol contract
    fn address(&self) -> Address;

    /// Provider used to read the chain's bridge state
    fn provider(&self) -> &Arc<Provider<Http>>;
}

/// A bridge protocol across all of its supported chains
#[async_trait]
pub trait ModuleSet: Send + Sync {
    /// Name attached to every route produced by this set
    fn bridge_module_name(&self) -> &str;

    /// Contract events emitted by the protocol during a bridge
    fn all_events(&self) -> &[&'static str];

    /// Returns the module for a chain, or `None` if the protocol is not
    /// deployed there
    fn get_module(&self, chain_id: ChainId) -> Option<&dyn Module>;

    /// Returns the module for a chain that is expected to be supported
    fn get_existing_module(&self, chain_id: ChainId) -> crate::Result<&dyn Module> {
        self.get_module(chain_id)
            .ok_or(crate::Error::ModuleNotFound(chain_id))
    }

    /// Estimated bridge time in seconds for transfers originating on a chain
    fn get_estimated_time(&self, chain_id: ChainId) -> crate::Result<u64>;

    /// Fallback deadlines for the origin and destination legs
    fn get_default_periods(&self) -> DefaultPeriods;

    /// Finds every route moving `amount_in` of `token_in` on the origin chain
    /// into `token_out` on the destination chain
    async fn get_bridge_routes(
        &self,
        origin_chain_id: ChainId,
        dest_chain_id: ChainId,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
    ) -> crate::Result<Vec<BridgeRoute>>;

    /// Protocol fee data; zeroed when the protocol reports none
    async fn get_fee_data(&self) -> crate::Result<FeeData>;

    /// Attaches fees, deadlines and the ETA to a route produced by this set
    async fn finalize_bridge_route(
        &self,
        route: &BridgeRoute,
        deadline: Option<U256>,
    ) -> crate::Result<BridgeQuote> {
        let router_address = self.get_existing_module(route.origin_chain_id)?.address();
        let estimated_time = self.get_estimated_time(route.origin_chain_id)?;
        let periods = self.get_default_periods();

        let origin_deadline = deadline.unwrap_or_else(|| calculate_deadline(periods.origin_period));
        let dest_deadline = calculate_deadline(periods.dest_period);
        let FeeData {
            fee_amount,
            fee_config,
        } = self.get_fee_data().await?;

        debug!(
            "Finalized {} route {} -> {} via {}",
            self.bridge_module_name(),
            route.origin_chain_id,
            route.dest_chain_id,
            route.bridge_token.symbol
        );

        Ok(BridgeQuote {
            fee_amount,
            fee_config,
            router_address,
            max_amount_out: route.dest_query.min_amount_out,
            origin_query: apply_deadline(&route.origin_query, origin_deadline),
            dest_query: apply_deadline(&route.dest_query, dest_deadline),
            estimated_time,
            bridge_module_name: route.bridge_module_name.clone(),
        })
    }
}
