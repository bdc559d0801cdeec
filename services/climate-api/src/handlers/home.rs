//! Home page handler.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Route listing served at `/`.
pub const HOME_HTML: &str = "Welcome to the Climate App API!<br/>\
Available Routes:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/&lt;start&gt;<br/>\
/api/v1.0/&lt;start&gt;/&lt;end&gt;";

/// GET / - Available routes
pub async fn home_handler() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        HOME_HTML,
    )
        .into_response()
}
