//! CLI configuration: optional TOML file, then `ROUTER__*` environment variables.

use anyhow::{Context, Result};
use bridge_adapters::RfqApiConfig;
use bridge_core::{ChainId, ChainProvider, RouterConfig};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "config/router";

/// RPC endpoint for one chain
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub chain_id: ChainId,
    pub rpc_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// RFQ quoter API connection
    pub rfq_api: RfqApiConfig,

    /// Aggregator settings
    pub router: RouterConfig,

    /// Chains the module sets are deployed on
    pub chains: Vec<ChainConfig>,
}

impl CliConfig {
    /// Loads `path` (or `config/router.*` when present) and applies environment overrides
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("ROUTER").separator("__"))
            .build()
            .and_then(|config| config.try_deserialize())
            .context("failed to load router configuration")
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .context("failed to parse router configuration")
    }

    pub fn chain_ids(&self) -> Vec<ChainId> {
        self.chains.iter().map(|chain| chain.chain_id).collect()
    }

    /// Connects an HTTP provider for every configured chain
    pub fn chain_providers(&self) -> Result<Vec<ChainProvider>> {
        self.chains
            .iter()
            .map(|chain| {
                ChainProvider::from_url(chain.chain_id, &chain.rpc_url)
                    .with_context(|| format!("invalid RPC URL for chain {}", chain.chain_id))
            })
            .collect()
    }
}
