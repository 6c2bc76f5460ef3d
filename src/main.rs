//! Cosmos transaction monitor entry point.
//!
//! This binary loads the configuration, starts one websocket watcher per
//! watched address and the alert dispatcher, and handles graceful shutdown
//! on interrupt signals.
//!
//! # Flow
//! 1. Loads environment variables and the JSON configuration file
//! 2. Starts a subscription watcher per (chain, address) pair
//! 3. Fetches, normalizes and delivers every detected transaction
//! 4. Handles graceful shutdown on Ctrl+C

use clap::Parser;
use cosmos_tx_monitor::{
	bootstrap::{load_config, Orchestrator},
	utils::{
		constants::DEFAULT_CONFIG_PATH,
		logging::{setup_logging, DEFAULT_LOG_LEVEL},
	},
};
use dotenvy::dotenv;
use std::path::PathBuf;
use tokio::sync::watch;
use tracing::{error, info};

/// Watches Cosmos addresses and sends an alert for every transaction they send
#[derive(Debug, Parser)]
#[command(name = "cosmos-tx-monitor", version, about)]
struct Cli {
	/// Path to the JSON configuration file
	#[arg(long = "config-path", env = "CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
	config_path: PathBuf,

	/// Log level used when RUST_LOG is not set
	#[arg(long = "log-level", env = "LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
	log_level: String,
}

/// Main entry point for the transaction monitoring service.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or the services
/// cannot be initialized.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// Load environment variables from .env file before parsing env-backed args
	dotenv().ok();
	let cli = Cli::parse();

	setup_logging(Some(&cli.log_level)).unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let config = load_config(&cli.config_path).map_err(|e| {
		anyhow::anyhow!(
			"Failed to load configuration from {}: {}",
			cli.config_path.display(),
			e
		)
	})?;

	let orchestrator = Orchestrator::from_config(&config)?;
	let (shutdown_tx, shutdown_rx) = watch::channel(false);
	let monitor = tokio::spawn(orchestrator.run(shutdown_rx));

	info!("Service started. Press Ctrl+C to shutdown");

	if let Err(e) = tokio::signal::ctrl_c().await {
		error!("Error waiting for Ctrl+C: {}", e);
	}
	info!("Shutdown signal received, stopping services...");

	if shutdown_tx.send(true).is_err() {
		error!("Failed to send shutdown signal");
	}
	if let Err(e) = monitor.await {
		error!("Monitor task failed: {}", e);
	}

	info!("Shutdown complete");
	Ok(())
}
