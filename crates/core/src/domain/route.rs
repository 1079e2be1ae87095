use super::chains::ChainId;
use super::query::Query;
use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};

/// Token used to bridge value between chains
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeToken {
    /// Symbol keying the bridge token; RFQ routes use the encoded ticker
    pub symbol: String,

    /// Bridge token address on the destination chain
    pub token: Address,
}

/// A quoted candidate path from an origin token to a destination token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRoute {
    pub origin_chain_id: ChainId,
    pub dest_chain_id: ChainId,
    pub bridge_token: BridgeToken,
    pub origin_query: Query,
    pub dest_query: Query,
    pub bridge_module_name: String,
}

/// Fee schedule reported by a protocol
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
    /// Bridge fee in basis points
    pub bridge_fee: u32,
    pub min_fee: U256,
    pub max_fee: U256,
}

/// Fee amount for a bridge operation together with its schedule
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeeData {
    pub fee_amount: U256,
    pub fee_config: FeeConfig,
}

/// Fallback settlement-time bounds for both legs, in seconds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DefaultPeriods {
    pub origin_period: u64,
    pub dest_period: u64,
}

/// A route finalized with fees, deadlines and an ETA
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeQuote {
    pub fee_amount: U256,
    pub fee_config: FeeConfig,

    /// Contract the origin transaction is sent to
    pub router_address: Address,

    /// Amount of the destination token received
    pub max_amount_out: U256,
    pub origin_query: Query,
    pub dest_query: Query,

    /// Estimated completion time in seconds
    pub estimated_time: u64,
    pub bridge_module_name: String,
}
