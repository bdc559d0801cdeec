//! Climate API Server
//!
//! Read-only JSON endpoints over the Hawaii station/measurement dataset.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use climate_api::config::{Args, ServiceConfig};
use climate_api::server;
use climate_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting climate API server");

    let config = ServiceConfig::try_from(&args)?;
    info!(database = %config.catalog.path.display(), "Opening climate database");

    let state = match AppState::new(&config).await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    server::serve(listener, state).await.context("Server failed")?;

    Ok(())
}
