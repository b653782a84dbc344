//! Bikeboard Dashboard Server
//!
//! Run with: cargo run --bin bikeboard
//!
//! # Configuration
//!
//! Loaded from `--config`, `~/.config/bikeboard/config.toml` or
//! `./bikeboard.toml`, falling back to defaults.
//!
//! Environment variables:
//! - `BIKEBOARD_API_URL`: Stats API base URL (default: /api/)
//! - `RUST_LOG`: Log filter (default: from config, info)

use anyhow::Context;
use bikeboard::api::StatsClient;
use bikeboard::config::Config;
use bikeboard::logging::init_logging;
use bikeboard::web::{serve, state_for};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bikeboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Trip statistics dashboard server")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::discover(args.config.as_deref()).context("Failed to load config")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.logging);

    tracing::info!("Starting Bikeboard dashboard v{}", env!("CARGO_PKG_VERSION"));

    let client = StatsClient::from_config(&config.api).context("Invalid stats API URL")?;
    tracing::info!("Stats API: {}", client.base_url());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    serve(state_for(client), &addr).await?;

    tracing::info!("Bikeboard dashboard stopped");
    Ok(())
}
