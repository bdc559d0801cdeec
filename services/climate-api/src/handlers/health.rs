//! Health and readiness handlers.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_date: Option<String>,
}

/// GET /health - Basic health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready - Readiness check (verifies database connectivity)
pub async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let (database, latest_date) = match state.catalog.ping().await {
        Ok(()) => match state.catalog.latest_date().await {
            Ok(latest) => ("ok".to_string(), latest),
            Err(e) => (format!("error: {}", e), None),
        },
        Err(e) => (format!("error: {}", e), None),
    };

    let ready = database == "ok";
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadyResponse {
            ready,
            database,
            latest_date,
        }),
    )
        .into_response()
}
