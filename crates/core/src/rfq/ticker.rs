use crate::domain::ChainId;
use ethers::types::Address;
use ethers::utils::to_checksum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A token on a specific chain, encoded as `chainId:0xToken`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ChainToken {
    pub chain_id: ChainId,
    pub token: Address,
}

impl ChainToken {
    pub fn new(chain_id: ChainId, token: Address) -> Self {
        Self { chain_id, token }
    }
}

impl fmt::Display for ChainToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, to_checksum(&self.token, None))
    }
}

impl FromStr for ChainToken {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chain_id, token) = s
            .split_once(':')
            .ok_or_else(|| crate::Error::InvalidTicker(format!("missing ':' in {:?}", s)))?;
        if token.contains(':') {
            return Err(crate::Error::InvalidTicker(format!(
                "too many ':' in {:?}",
                s
            )));
        }

        // Canonical decimal only, so each ticker has exactly one symbol
        let canonical = !chain_id.is_empty()
            && chain_id.bytes().all(|b| b.is_ascii_digit())
            && (chain_id == "0" || !chain_id.starts_with('0'));
        if !canonical {
            return Err(crate::Error::InvalidTicker(format!(
                "bad chain id {:?}",
                chain_id
            )));
        }
        let chain_id = chain_id
            .parse::<ChainId>()
            .map_err(|e| crate::Error::InvalidTicker(format!("bad chain id {:?}: {}", chain_id, e)))?;
        if !token.starts_with("0x") || token.len() != 42 {
            return Err(crate::Error::InvalidTicker(format!(
                "bad token address {:?}",
                token
            )));
        }
        let token = Address::from_str(token)
            .map_err(|e| crate::Error::InvalidTicker(format!("bad token address {:?}: {}", token, e)))?;

        Ok(Self { chain_id, token })
    }
}

/// A directed cross-chain token pair served by the RFQ market.
///
/// The encoded form `originChainId:0xOrigin-destChainId:0xDest` is used as
/// the bridge token symbol of RFQ routes. Decoding does not check that the
/// two chains differ; quoting does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    pub origin_token: ChainToken,
    pub dest_token: ChainToken,
}

impl Ticker {
    pub fn new(origin_token: ChainToken, dest_token: ChainToken) -> Self {
        Self {
            origin_token,
            dest_token,
        }
    }

    /// Encoded ticker, used as the route's bridge symbol
    pub fn symbol(&self) -> String {
        self.to_string()
    }

    pub fn is_cross_chain(&self) -> bool {
        self.origin_token.chain_id != self.dest_token.chain_id
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin_token, self.dest_token)
    }
}

impl FromStr for Ticker {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(origin), Some(dest), None) => Ok(Self {
                origin_token: origin.parse()?,
                dest_token: dest.parse()?,
            }),
            _ => Err(crate::Error::InvalidTicker(format!(
                "expected exactly one '-' in {:?}",
                s
            ))),
        }
    }
}
