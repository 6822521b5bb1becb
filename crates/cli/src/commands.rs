//! Subcommands of the bundle tools binary

use alloy::primitives::{TxHash, U256};
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{Config, ConfigLoader};
use relay_client::{AuthSigner, RelayClient};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use types::utils::{string_to_u256, wei_to_gwei};

/// Base fee projection, bundle pricing and relay queries
#[derive(Debug, Parser)]
#[command(name = "bundle_tools", version, about)]
pub struct Cli {
    /// YAML configuration file; environment variables are used when omitted
    #[arg(long, short, env = "CONFIG_PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Worst-case base fee after a number of blocks
    ProjectBaseFee {
        /// Current base fee in wei
        #[arg(long, value_parser = parse_wei)]
        base_fee: U256,
        /// Blocks to project ahead; defaults to fees.blocks_in_future
        #[arg(long)]
        blocks: Option<u64>,
    },
    /// Base fee implied for the next block by a simulated gas usage
    NextBaseFee {
        #[arg(long, value_parser = parse_wei)]
        base_fee: U256,
        #[arg(long)]
        gas_used: u64,
        #[arg(long)]
        gas_limit: u64,
    },
    /// Landed bundles of a block from the public blocks API
    BlockStats {
        #[arg(long)]
        block: u64,
    },
    /// Realized pricing of selected transactions that landed in a block
    BundlePricing {
        #[arg(long)]
        block: u64,
        /// Base fee of that block in wei
        #[arg(long, value_parser = parse_wei)]
        base_fee: U256,
        /// Transaction hashes that make up the bundle
        #[arg(long = "tx", required = true, value_parser = parse_tx_hash)]
        txs: Vec<TxHash>,
    },
    /// Reputation of the configured auth signer
    UserStats {
        #[arg(long)]
        block: u64,
    },
    /// Status of a submitted bundle
    BundleStats {
        #[arg(long)]
        bundle_hash: String,
        #[arg(long)]
        block: u64,
    },
    /// Write a default configuration file
    ExampleConfig {
        #[arg(long, default_value = "config.yaml")]
        path: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct BaseFeeOutput {
    base_fee: U256,
    blocks: u64,
    projected_base_fee: U256,
    projected_base_fee_gwei: f64,
}

/// Execute a parsed subcommand
pub async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::ProjectBaseFee { base_fee, blocks } => {
            let blocks = blocks.unwrap_or(config.fees.blocks_in_future);
            let projected = pricing::project_base_fee(base_fee, blocks)?;
            print_json(&BaseFeeOutput {
                base_fee,
                blocks,
                projected_base_fee: projected,
                projected_base_fee_gwei: wei_to_gwei(projected),
            })
        }
        Command::NextBaseFee {
            base_fee,
            gas_used,
            gas_limit,
        } => {
            let next = config
                .base_fee_model()?
                .estimate_next_block_base_fee(base_fee, gas_used, gas_limit)?;
            print_json(&BaseFeeOutput {
                base_fee,
                blocks: 1,
                projected_base_fee: next,
                projected_base_fee_gwei: wei_to_gwei(next),
            })
        }
        Command::BlockStats { block } => {
            let client = relay_client(config, false)?;
            print_json(&client.fetch_block_stats(block).await?)
        }
        Command::BundlePricing {
            block,
            base_fee,
            txs,
        } => {
            let client = relay_client(config, false)?;
            print_json(&client.bundle_pricing_for_block(block, base_fee, &txs).await?)
        }
        Command::UserStats { block } => {
            let client = relay_client(config, true)?;
            print_json(&client.get_user_stats(block).await?)
        }
        Command::BundleStats { bundle_hash, block } => {
            let client = relay_client(config, true)?;
            print_json(&client.get_bundle_stats(&bundle_hash, block).await?)
        }
        Command::ExampleConfig { path } => {
            ConfigLoader::create_example(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote example configuration to {}", path.display());
            Ok(())
        }
    }
}

fn relay_client(config: &Config, authenticated: bool) -> Result<RelayClient> {
    let signer: Arc<dyn AuthSigner> = match config.signer.auth_signer() {
        Ok(signer) => Arc::new(signer),
        Err(e) if authenticated => {
            return Err(e).context("An auth key is required for relay requests");
        }
        Err(_) => {
            warn!("No auth key configured, using an ephemeral key");
            Arc::new(PrivateKeySigner::random())
        }
    };

    Ok(RelayClient::new(config.relay_endpoint(), signer)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", output);
    Ok(())
}

fn parse_wei(s: &str) -> Result<U256, String> {
    string_to_u256(s)
}

fn parse_tx_hash(s: &str) -> Result<TxHash, String> {
    s.parse().map_err(|e| format!("Invalid transaction hash {}: {}", s, e))
}
