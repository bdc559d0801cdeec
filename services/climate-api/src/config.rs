//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use storage::CatalogOptions;

/// Climate API Server
#[derive(Parser, Debug, Clone)]
#[command(name = "climate-api")]
#[command(about = "Read-only JSON API over the Hawaii climate dataset")]
pub struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:5000", env = "CLIMATE_LISTEN_ADDR")]
    pub listen: String,

    /// Path to the SQLite dataset
    #[arg(
        short,
        long,
        default_value = "Resources/hawaii.sqlite",
        env = "CLIMATE_DATABASE_PATH"
    )]
    pub database: PathBuf,

    /// Maximum pooled read connections
    #[arg(long, default_value = "4", env = "CLIMATE_DB_MAX_CONNECTIONS")]
    pub max_connections: u32,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,
}

/// Validated service settings.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub listen_addr: SocketAddr,
    pub catalog: CatalogOptions,
}

impl ServiceConfig {
    /// Settings for serving `database` with default pool size.
    pub fn for_database(database: impl Into<PathBuf>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            catalog: CatalogOptions::new(database),
        }
    }
}

impl TryFrom<&Args> for ServiceConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> Result<Self> {
        let listen_addr: SocketAddr = args
            .listen
            .parse()
            .with_context(|| format!("Invalid listen address: {}", args.listen))?;

        Ok(Self {
            listen_addr,
            catalog: CatalogOptions::new(&args.database).with_max_connections(args.max_connections),
        })
    }
}
