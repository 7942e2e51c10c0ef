//! fleetd - ship record service
//!
//! Loads the YAML configuration, seeds the in-memory store and serves the
//! REST API until Ctrl+C or SIGTERM.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fleet::config::FleetConfig;
use fleet::server::ServerBuilder;
use fleet::storage::InMemoryShipStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for fleetd
#[derive(Parser, Debug)]
#[command(name = "fleetd")]
#[command(about = "Record-management service for a fleet of ships")]
#[command(version)]
struct Args {
    /// YAML configuration file
    #[arg(short, long, env = "FLEET_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overriding `server.host` and `server.port`
    #[arg(short, long, env = "FLEET_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FleetConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FleetConfig::default(),
    };

    let addr = args.bind.clone().unwrap_or_else(|| config.bind_address());

    info!(
        "Starting fleetd (page size {}, {} seed ships)",
        config.paging.default_page_size,
        config.seed.len()
    );

    ServerBuilder::new()
        .with_config(config)
        .with_store(InMemoryShipStore::new())
        .serve(&addr)
        .await
}
