//! Temperature statistics over a date range.
//!
//! Path dates are passed through unvalidated and compared against stored
//! `YYYY-MM-DD` strings, so a malformed date simply selects a different
//! (often empty) window.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};
use climate_common::{DateWindow, TemperatureStats};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// The single object of a stats response.
///
/// Min/Avg/Max are `null` when no measurement falls in the range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureStatsEntry {
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "End Date")]
    pub end_date: Option<String>,
    #[serde(rename = "Min Temperature")]
    pub min_temperature: Option<f64>,
    #[serde(rename = "Avg Temperature")]
    pub avg_temperature: Option<f64>,
    #[serde(rename = "Max Temperature")]
    pub max_temperature: Option<f64>,
}

impl From<TemperatureStats> for TemperatureStatsEntry {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            start_date: stats.window.start,
            end_date: stats.window.end,
            min_temperature: stats.min,
            avg_temperature: stats.avg,
            max_temperature: stats.max,
        }
    }
}

async fn stats_response(
    state: &AppState,
    window: DateWindow,
) -> Result<Json<Vec<TemperatureStatsEntry>>, ApiError> {
    let stats = state.catalog.temperature_stats(&window).await?;
    debug!(
        start = %window.start,
        end = ?window.end,
        empty = stats.is_empty(),
        "Computed temperature stats"
    );
    Ok(Json(vec![stats.into()]))
}

/// GET /api/v1.0/:start - Stats from `start` to the latest measurement
pub async fn start_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureStatsEntry>>, ApiError> {
    stats_response(&state, DateWindow::starting(start)).await
}

/// GET /api/v1.0/:start/:end - Stats over `start..=end`
pub async fn start_end_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureStatsEntry>>, ApiError> {
    stats_response(&state, DateWindow::between(start, end)).await
}
