//! Trailing-year precipitation handler.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::Extension, Json};
use climate_common::PrecipitationReading;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Date -> precipitation, keys in ascending date order.
pub type PrecipitationMap = BTreeMap<String, Option<f64>>;

/// Fold readings into a map. A later reading for the same date replaces an
/// earlier one.
pub fn precipitation_map(readings: Vec<PrecipitationReading>) -> PrecipitationMap {
    readings.into_iter().map(|r| (r.date, r.prcp)).collect()
}

/// GET /api/v1.0/precipitation - Last 12 months of precipitation
pub async fn precipitation_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<PrecipitationMap>, ApiError> {
    let Some(window) = state.catalog.trailing_year().await? else {
        debug!("No measurements, returning empty precipitation map");
        return Ok(Json(PrecipitationMap::new()));
    };

    let readings = state.catalog.precipitation(&window).await?;
    debug!(cutoff = %window.start, rows = readings.len(), "Fetched precipitation");

    Ok(Json(precipitation_map(readings)))
}
