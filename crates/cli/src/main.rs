//! Relay kit command line tools - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, ConfigLoader, LoggingConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    if let Err(e) = dotenv::dotenv() {
        if !e.to_string().contains("No such file or directory") {
            eprintln!("Could not load .env file: {}", e);
        }
    }

    let cli = Cli::parse();

    // writing an example config must not require a loadable one
    let config = if matches!(cli.command, Command::ExampleConfig { .. }) {
        Config::default()
    } else {
        let config = load_config(&cli)?;
        init_logging(&config.logging)?;

        info!(
            relay = %config.relay.name,
            relay_url = %config.relay.relay_url,
            "Relay kit v{}",
            env!("CARGO_PKG_VERSION")
        );
        config
    };

    commands::run(cli.command, &config).await
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => ConfigLoader::load_from_env().context("Failed to load configuration"),
    }
}

/// Initialize logging from configuration, letting RUST_LOG / LOG_FORMAT override it
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    // logs go to stderr so command output on stdout stays machine readable
    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format.as_str() {
        "pretty" => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
    }

    if log_level == "trace" || log_level == "debug" {
        warn!("Debug/trace logging enabled - request bodies will be logged");
    }

    Ok(())
}
