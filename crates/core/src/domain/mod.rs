pub mod chains;
pub mod query;
pub mod route;

pub use chains::{chain_name, ChainId, ChainProvider, SupportedChain};
pub use query::{apply_deadline, apply_slippage, calculate_deadline, create_no_swap_query, Query};
pub use route::{BridgeQuote, BridgeRoute, BridgeToken, DefaultPeriods, FeeConfig, FeeData};
