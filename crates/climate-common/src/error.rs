//! Error types for the climate services.

use thiserror::Error;

use crate::time::TimeParseError;

/// Result type alias using ClimateError.
pub type ClimateResult<T> = Result<T, ClimateError>;

/// Primary error type for climate queries.
#[derive(Debug, Error)]
pub enum ClimateError {
    // === Data Errors ===
    #[error("Invalid date in dataset: {0}")]
    InvalidDate(String),

    // === Storage Errors ===
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ClimateError {
    /// Short machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClimateError::InvalidDate(_) => "InvalidDate",
            ClimateError::DatabaseError(_) => "DatabaseError",
            ClimateError::SchemaMismatch(_) => "SchemaMismatch",
            ClimateError::InternalError(_) => "InternalError",
            ClimateError::ServiceUnavailable(_) => "ServiceUnavailable",
        }
    }

    /// Get the HTTP status code for this error.
    ///
    /// Path dates are never parsed, so `InvalidDate` can only come from a
    /// stored row and is a server-side failure.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ClimateError::ServiceUnavailable(_) => 503,
            _ => 500,
        }
    }
}

impl From<TimeParseError> for ClimateError {
    fn from(err: TimeParseError) -> Self {
        ClimateError::InvalidDate(err.to_string())
    }
}
