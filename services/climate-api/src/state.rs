//! Application state for the climate API.

use std::sync::Arc;

use climate_common::ClimateResult;
use storage::Catalog;
use tracing::info;

use crate::config::ServiceConfig;

/// Shared application state.
pub struct AppState {
    /// Read-only catalog over the climate dataset.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Open the dataset described by `config`.
    ///
    /// Fails when the database is missing or its schema does not match.
    pub async fn new(config: &ServiceConfig) -> ClimateResult<Self> {
        let catalog = Catalog::connect(&config.catalog).await?;

        let summary = catalog.summary().await?;
        info!(
            stations = summary.stations,
            measurements = summary.measurements,
            first_date = ?summary.first_date,
            latest_date = ?summary.latest_date,
            "Loaded climate dataset"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }

    /// Release the database connections.
    pub async fn shutdown(&self) {
        self.catalog.close().await;
        info!("Closed climate database");
    }
}
