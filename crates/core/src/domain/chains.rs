use ethers::providers::{Http, Provider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Numeric EVM chain id
pub type ChainId = u64;

/// Blockchain networks served by the router
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SupportedChain {
    Ethereum = 1,
    Optimism = 10,
    Cronos = 25,
    Bnb = 56,
    Polygon = 137,
    Fantom = 250,
    Boba = 288,
    Metis = 1088,
    Moonbeam = 1284,
    Moonriver = 1285,
    Dogechain = 2000,
    Canto = 7700,
    Klaytn = 8217,
    Base = 8453,
    Arbitrum = 42161,
    Avalanche = 43114,
    Dfk = 53935,
    Aurora = 1313161554,
    Harmony = 1666600000,
}

impl SupportedChain {
    pub const ALL: [SupportedChain; 19] = [
        SupportedChain::Ethereum,
        SupportedChain::Optimism,
        SupportedChain::Cronos,
        SupportedChain::Bnb,
        SupportedChain::Polygon,
        SupportedChain::Fantom,
        SupportedChain::Boba,
        SupportedChain::Metis,
        SupportedChain::Moonbeam,
        SupportedChain::Moonriver,
        SupportedChain::Dogechain,
        SupportedChain::Canto,
        SupportedChain::Klaytn,
        SupportedChain::Base,
        SupportedChain::Arbitrum,
        SupportedChain::Avalanche,
        SupportedChain::Dfk,
        SupportedChain::Aurora,
        SupportedChain::Harmony,
    ];

    /// Returns chain name
    pub fn name(&self) -> &'static str {
        match self {
            SupportedChain::Ethereum => "Ethereum",
            SupportedChain::Optimism => "Optimism",
            SupportedChain::Cronos => "Cronos",
            SupportedChain::Bnb => "BNB Chain",
            SupportedChain::Polygon => "Polygon",
            SupportedChain::Fantom => "Fantom",
            SupportedChain::Boba => "Boba",
            SupportedChain::Metis => "Metis",
            SupportedChain::Moonbeam => "Moonbeam",
            SupportedChain::Moonriver => "Moonriver",
            SupportedChain::Dogechain => "Dogechain",
            SupportedChain::Canto => "Canto",
            SupportedChain::Klaytn => "Klaytn",
            SupportedChain::Base => "Base",
            SupportedChain::Arbitrum => "Arbitrum",
            SupportedChain::Avalanche => "Avalanche",
            SupportedChain::Dfk => "DFK Chain",
            SupportedChain::Aurora => "Aurora",
            SupportedChain::Harmony => "Harmony",
        }
    }

    /// Returns chain id as u64
    pub fn as_u64(&self) -> ChainId {
        *self as ChainId
    }

    /// Looks up a chain by its numeric id
    pub fn from_u64(id: ChainId) -> Option<Self> {
        Self::ALL.iter().copied().find(|chain| chain.as_u64() == id)
    }
}

/// Human readable name for logging; unknown chains fall back to their id
pub fn chain_name(chain_id: ChainId) -> String {
    SupportedChain::from_u64(chain_id)
        .map(|chain| chain.name().to_string())
        .unwrap_or_else(|| format!("chain {}", chain_id))
}

/// All chains with a SynapseRouter deployment
pub fn supported_chain_ids() -> Vec<ChainId> {
    SupportedChain::ALL.iter().map(SupportedChain::as_u64).collect()
}

/// Chains with a SynapseCCTP deployment
pub const CCTP_SUPPORTED_CHAIN_IDS: [ChainId; 5] = [
    SupportedChain::Ethereum as ChainId,
    SupportedChain::Optimism as ChainId,
    SupportedChain::Base as ChainId,
    SupportedChain::Arbitrum as ChainId,
    SupportedChain::Avalanche as ChainId,
];

/// Chains with a FastBridge (RFQ) deployment
pub const RFQ_SUPPORTED_CHAIN_IDS: [ChainId; 4] = [
    SupportedChain::Ethereum as ChainId,
    SupportedChain::Optimism as ChainId,
    SupportedChain::Base as ChainId,
    SupportedChain::Arbitrum as ChainId,
];

/// A caller-supplied provider for one chain
#[derive(Debug, Clone)]
pub struct ChainProvider {
    pub chain_id: ChainId,
    pub provider: Arc<Provider<Http>>,
}

impl ChainProvider {
    pub fn new(chain_id: ChainId, provider: Arc<Provider<Http>>) -> Self {
        Self { chain_id, provider }
    }

    /// Builds an HTTP provider for the given RPC url
    pub fn from_url(chain_id: ChainId, rpc_url: &str) -> crate::Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url).map_err(|e| {
            crate::Error::ConfigError(format!("invalid RPC url for chain {}: {}", chain_id, e))
        })?;
        Ok(Self::new(chain_id, Arc::new(provider)))
    }
}
