//! Clients for the off-chain services the route discovery core depends on.

pub mod rfq_api;

pub use rfq_api::{RfqApiClient, RfqApiConfig, RfqApiQuote};
