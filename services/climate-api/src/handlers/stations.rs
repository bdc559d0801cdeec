//! Station list handler.

use std::sync::Arc;

use axum::{extract::Extension, Json};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v1.0/stations - All station codes, alphabetically
pub async fn stations_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let codes = state.catalog.list_station_codes().await?;
    debug!(count = codes.len(), "Listed stations");
    Ok(Json(codes))
}
