//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use climate_common::ClimateError;
use serde::Serialize;

/// Error returned by handlers; rendered as a JSON body.
#[derive(Debug)]
pub struct ApiError(pub ClimateError);

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

impl From<ClimateError> for ApiError {
    fn from(err: ClimateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        tracing::error!(code = self.0.error_code(), "Request failed: {}", self.0);

        let body = ErrorBody {
            error: self.0.to_string(),
            code: self.0.error_code(),
        };

        (status, Json(body)).into_response()
    }
}
