use ethers::types::{Address, Bytes, U256, U512};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One leg of a bridge route: what the user ends up holding on one chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Adapter performing the swap, zero when no swap happens
    pub router_adapter: Address,

    /// Token received at the end of this leg
    pub token_out: Address,

    /// Minimum amount of `token_out` received
    pub min_amount_out: U256,

    /// Timestamp (or block number) after which the leg reverts
    pub deadline: U256,

    /// Encoded swap parameters, absent for no-swap legs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_payload: Option<Bytes>,
}

impl Query {
    /// Whether the leg can be used for routing
    pub fn is_routable(&self) -> bool {
        !self.min_amount_out.is_zero()
    }

    /// Whether the leg performs an on-chain swap
    pub fn has_swap(&self) -> bool {
        self.swap_payload.is_some()
    }
}

/// Creates a Query that holds `amount` of `token_out` with no swap
pub fn create_no_swap_query(token_out: Address, amount: U256) -> Query {
    Query {
        router_adapter: Address::zero(),
        token_out,
        min_amount_out: amount,
        deadline: U256::MAX,
        swap_payload: None,
    }
}

/// Returns a copy of the query with the deadline replaced
pub fn apply_deadline(query: &Query, deadline: U256) -> Query {
    Query {
        deadline,
        ..query.clone()
    }
}

/// Returns a copy of the query with `min_amount_out` reduced by
/// `numerator / denominator`
pub fn apply_slippage(query: &Query, numerator: u64, denominator: u64) -> crate::Result<Query> {
    if denominator == 0 {
        return Err(crate::Error::InvalidQuery(
            "slippage denominator cannot be zero".to_string(),
        ));
    }
    if numerator > denominator {
        return Err(crate::Error::InvalidQuery(format!(
            "slippage {}/{} is greater than 1",
            numerator, denominator
        )));
    }

    // numerator <= denominator keeps the result within min_amount_out
    let slippage = query.min_amount_out.full_mul(U256::from(numerator)) / U512::from(denominator);
    let slippage = U256::try_from(slippage)
        .map_err(|_| crate::Error::InvalidQuery("slippage overflows U256".to_string()))?;
    Ok(Query {
        min_amount_out: query.min_amount_out - slippage,
        ..query.clone()
    })
}

/// Unix timestamp `seconds` from now
pub fn calculate_deadline(seconds: u64) -> U256 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    U256::from(now.saturating_add(seconds))
}
