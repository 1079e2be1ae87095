use crate::domain::ChainId;
use crate::module::Module;
use ethers::providers::{Http, Provider};
use ethers::types::Address;
use std::sync::Arc;

/// FastBridge contract binding on a single chain
#[derive(Debug, Clone)]
pub struct FastBridge {
    chain_id: ChainId,
    provider: Arc<Provider<Http>>,
    address: Address,
}

impl FastBridge {
    pub fn new(chain_id: ChainId, provider: Arc<Provider<Http>>, address: Address) -> Self {
        Self {
            chain_id,
            provider,
            address,
        }
    }
}

impl Module for FastBridge {
    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    fn address(&self) -> Address {
        self.address
    }

    fn provider(&self) -> &Arc<Provider<Http>> {
        &self.provider
    }
}
