//! Temperature observations of the most active station.

use std::sync::Arc;

use axum::{extract::Extension, Json};
use climate_common::TemperatureObservation;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// One row of the `/tobs` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TobsEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

impl From<TemperatureObservation> for TobsEntry {
    fn from(obs: TemperatureObservation) -> Self {
        Self {
            date: obs.date,
            temperature: obs.tobs,
        }
    }
}

/// GET /api/v1.0/tobs - Last 12 months of observations for the busiest station
pub async fn tobs_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<TobsEntry>>, ApiError> {
    let Some(busiest) = state.catalog.most_active_station().await? else {
        debug!("No measurements, returning empty observation list");
        return Ok(Json(Vec::new()));
    };

    let Some(window) = state.catalog.trailing_year().await? else {
        return Ok(Json(Vec::new()));
    };

    let observations = state
        .catalog
        .temperature_observations(&busiest.station, &window)
        .await?;

    debug!(
        station = %busiest.station,
        total_observations = busiest.observations,
        cutoff = %window.start,
        rows = observations.len(),
        "Fetched temperature observations"
    );

    Ok(Json(observations.into_iter().map(TobsEntry::from).collect()))
}
