//! Aggregates routes across bridge protocols.

use crate::config::RouterConfig;
use crate::domain::{chain_name, BridgeQuote, ChainId};
use crate::module::ModuleSet;
use ethers::types::{Address, U256};
use futures::future::join_all;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Queries every registered module set and ranks the finalized quotes
pub struct BridgeRouter {
    module_sets: Vec<Arc<dyn ModuleSet>>,
    config: RouterConfig,
}

impl BridgeRouter {
    pub fn new(module_sets: Vec<Arc<dyn ModuleSet>>, config: RouterConfig) -> Self {
        Self {
            module_sets,
            config,
        }
    }

    pub fn module_sets(&self) -> &[Arc<dyn ModuleSet>] {
        &self.module_sets
    }

    /// Finds a module set by its bridge module name
    pub fn module_set(&self, bridge_module_name: &str) -> Option<&Arc<dyn ModuleSet>> {
        self.module_sets
            .iter()
            .find(|set| set.bridge_module_name() == bridge_module_name)
    }

    /// Quotes from every module set, best output first.
    ///
    /// A module set that fails or exceeds the configured timeout during route
    /// discovery is skipped. Failing to finalize a discovered route means a
    /// module set is misconfigured, and is returned as an error.
    pub async fn all_bridge_quotes(
        &self,
        origin_chain_id: ChainId,
        dest_chain_id: ChainId,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        deadline: Option<U256>,
    ) -> crate::Result<Vec<BridgeQuote>> {
        if origin_chain_id == dest_chain_id {
            return Err(crate::Error::SameChain(origin_chain_id));
        }

        info!(
            "Getting quotes from {} module sets for {} -> {}, amount: {}",
            self.module_sets.len(),
            chain_name(origin_chain_id),
            chain_name(dest_chain_id),
            amount_in
        );

        let tasks = self.module_sets.iter().map(|set| async move {
            let discovery = set.get_bridge_routes(
                origin_chain_id,
                dest_chain_id,
                token_in,
                token_out,
                amount_in,
            );
            let routes = match timeout(self.config.timeout(), discovery).await {
                Ok(Ok(routes)) => routes,
                Ok(Err(e)) => {
                    warn!("{} route discovery failed: {}", set.bridge_module_name(), e);
                    return Ok(Vec::new());
                }
                Err(_) => {
                    let e = crate::Error::Timeout(self.config.timeout_ms);
                    warn!("{} route discovery failed: {}", set.bridge_module_name(), e);
                    return Ok(Vec::new());
                }
            };

            debug!("{} returned {} routes", set.bridge_module_name(), routes.len());

            let mut quotes = Vec::with_capacity(routes.len());
            for route in &routes {
                quotes.push(set.finalize_bridge_route(route, deadline).await?);
            }
            Ok::<_, crate::Error>(quotes)
        });

        let mut quotes = Vec::new();
        for result in join_all(tasks).await {
            quotes.extend(result?);
        }

        if self.config.skip_zero_quotes {
            quotes.retain(|quote| !quote.max_amount_out.is_zero());
        }
        // Stable sort keeps module set order between equal outputs
        quotes.sort_by(|a, b| b.max_amount_out.cmp(&a.max_amount_out));

        info!("Quote aggregation completed: {} quotes", quotes.len());
        Ok(quotes)
    }

    /// Best quote across all module sets
    pub async fn bridge_quote(
        &self,
        origin_chain_id: ChainId,
        dest_chain_id: ChainId,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        deadline: Option<U256>,
    ) -> crate::Result<BridgeQuote> {
        self.all_bridge_quotes(
            origin_chain_id,
            dest_chain_id,
            token_in,
            token_out,
            amount_in,
            deadline,
        )
        .await?
        .into_iter()
        .next()
        .ok_or(crate::Error::NoRouteFound {
            origin: origin_chain_id,
            dest: dest_chain_id,
        })
    }
}
