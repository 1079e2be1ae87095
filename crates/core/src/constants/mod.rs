pub mod addresses;
pub mod times;

pub use addresses::{
    generate_address_map, AddressMap, CCTP_ROUTER_ADDRESS, CCTP_ROUTER_ADDRESS_MAP,
    FAST_BRIDGE_ADDRESS, FAST_BRIDGE_ADDRESS_MAP, ROUTER_ADDRESS, ROUTER_ADDRESS_MAP,
};
pub use times::{median_time_rfq, MEDIAN_TIME_RFQ, ONE_HOUR, TEN_MINUTES};
