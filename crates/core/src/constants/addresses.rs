use crate::domain::chains::{
    supported_chain_ids, ChainId, CCTP_SUPPORTED_CHAIN_IDS, RFQ_SUPPORTED_CHAIN_IDS,
};
use ethers::types::Address;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::str::FromStr;

/// Contract address per chain id
pub type AddressMap = HashMap<ChainId, Address>;

/// Builds an address map using `address` for every chain id, unless
/// `exceptions` holds an override for that chain.
pub fn generate_address_map(
    chain_ids: &[ChainId],
    address: Address,
    exceptions: Option<&AddressMap>,
) -> AddressMap {
    chain_ids
        .iter()
        .map(|chain_id| {
            let address = exceptions
                .and_then(|map| map.get(chain_id))
                .copied()
                .unwrap_or(address);
            (*chain_id, address)
        })
        .collect()
}

pub const ROUTER_ADDRESS: &str = "0x7E7A0e201FD38d3ADAA9523Da6C109a07118C96a";
pub const CCTP_ROUTER_ADDRESS: &str = "0xD359bc471554504f683fbd4f6e36848612349DDF";
pub const FAST_BRIDGE_ADDRESS: &str = "0x5523D3c98809DdDB82C686E152F5C58B1B0fB59E";

/// Parses one of the deployment address constants above
fn deployment(address: &str) -> Address {
    Address::from_str(address).expect("deployment address constant is valid hex")
}

/// SynapseRouter deployments
pub static ROUTER_ADDRESS_MAP: Lazy<AddressMap> = Lazy::new(|| {
    generate_address_map(&supported_chain_ids(), deployment(ROUTER_ADDRESS), None)
});

/// SynapseCCTP deployments
pub static CCTP_ROUTER_ADDRESS_MAP: Lazy<AddressMap> = Lazy::new(|| {
    generate_address_map(
        &CCTP_SUPPORTED_CHAIN_IDS,
        deployment(CCTP_ROUTER_ADDRESS),
        None,
    )
});

/// FastBridge (RFQ) deployments
pub static FAST_BRIDGE_ADDRESS_MAP: Lazy<AddressMap> = Lazy::new(|| {
    generate_address_map(
        &RFQ_SUPPORTED_CHAIN_IDS,
        deployment(FAST_BRIDGE_ADDRESS),
        None,
    )
});
