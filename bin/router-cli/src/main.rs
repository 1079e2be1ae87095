use anyhow::{Context, Result};
use bridge_adapters::RfqApiClient;
use bridge_core::constants::{median_time_rfq, FAST_BRIDGE_ADDRESS_MAP};
use bridge_core::domain::chain_name;
use bridge_core::{BridgeRouter, ChainId, FastBridgeSet, ModuleSet};
use clap::{Args, Parser, Subcommand};
use ethers::types::{Address, U256};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "router-cli", version, about = "Cross-chain bridge route discovery")]
struct Cli {
    /// Configuration file (defaults to config/router.* when present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Raw RFQ routes for a transfer
    Routes(TransferArgs),

    /// Finalized quotes from every module set, best first
    Quotes {
        #[command(flatten)]
        transfer: TransferArgs,

        /// Origin deadline as a unix timestamp
        #[arg(long, value_parser = parse_u256)]
        deadline: Option<U256>,
    },

    /// Configured chains and their RFQ deployment
    Chains,
}

#[derive(Args, Debug)]
struct TransferArgs {
    #[arg(long)]
    origin_chain_id: ChainId,

    #[arg(long)]
    dest_chain_id: ChainId,

    #[arg(long, value_parser = parse_address)]
    token_in: Address,

    #[arg(long, value_parser = parse_address)]
    token_out: Address,

    /// Amount in origin token base units
    #[arg(long, value_parser = parse_u256)]
    amount_in: U256,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ChainInfo {
    chain_id: ChainId,
    name: String,
    fast_bridge: Option<Address>,
    estimated_time: Option<u64>,
}

fn parse_address(value: &str) -> std::result::Result<Address, String> {
    Address::from_str(value).map_err(|e| format!("invalid address {}: {}", value, e))
}

fn parse_u256(value: &str) -> std::result::Result<U256, String> {
    U256::from_dec_str(value).map_err(|e| format!("invalid amount {}: {:?}", value, e))
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn rfq_module_set(config: &CliConfig) -> Result<FastBridgeSet> {
    let quoter = RfqApiClient::new(config.rfq_api.clone())?;
    let chains = config.chain_providers()?;
    Ok(FastBridgeSet::new(chains, Arc::new(quoter)))
}

fn chain_info(config: &CliConfig) -> Vec<ChainInfo> {
    config
        .chain_ids()
        .into_iter()
        .map(|chain_id| ChainInfo {
            chain_id,
            name: chain_name(chain_id),
            fast_bridge: FAST_BRIDGE_ADDRESS_MAP.get(&chain_id).copied(),
            estimated_time: median_time_rfq(chain_id),
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = CliConfig::load(cli.config.as_deref())?;
    info!("Loaded configuration for {} chains", config.chains.len());

    match cli.command {
        Command::Routes(transfer) => {
            let rfq = rfq_module_set(&config)?;
            let routes = rfq
                .get_bridge_routes(
                    transfer.origin_chain_id,
                    transfer.dest_chain_id,
                    transfer.token_in,
                    transfer.token_out,
                    transfer.amount_in,
                )
                .await
                .context("route discovery failed")?;
            print_json(&routes)?;
        }
        Command::Quotes { transfer, deadline } => {
            let rfq = rfq_module_set(&config)?;
            let router = BridgeRouter::new(vec![Arc::new(rfq)], config.router.clone());
            let quotes = router
                .all_bridge_quotes(
                    transfer.origin_chain_id,
                    transfer.dest_chain_id,
                    transfer.token_in,
                    transfer.token_out,
                    transfer.amount_in,
                    deadline,
                )
                .await
                .context("quote aggregation failed")?;
            print_json(&quotes)?;
        }
        Command::Chains => print_json(&chain_info(&config))?,
    }

    Ok(())
}
