//! # starkbal
//!
//! Command-line interface for the balance contract on Starknet.
//!
//! ## Usage
//!
//! ```bash
//! # Reads
//! starkbal get_balance
//! starkbal get_answer --env testnet
//! starkbal sum -a 3 -b -5
//!
//! # Writes (needs account_address and private_key for the environment)
//! starkbal increase_balance --amount 10 --max-fee 200000000000000
//!
//! # JSON output and an explicit config file
//! starkbal --json --config ./starkbal.toml get_balance
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod contract;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;

/// Balance contract CLI
#[derive(Parser, Debug)]
#[command(name = "starkbal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to ~/.starkbal/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Contract address, overriding the configured one
    #[arg(long, global = true)]
    address: Option<String>,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: commands::balance::BalanceCommand,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let result = match Config::load(cli.config.as_deref()) {
        Ok(config) => {
            cli.command
                .execute(&config, cli.address.as_deref(), cli.json)
                .await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
