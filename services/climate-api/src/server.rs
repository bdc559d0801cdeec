//! Router construction and the serve loop.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::handlers;
use crate::state::AppState;

/// Build the API router over `state`.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Home
        .route("/", get(handlers::home::home_handler))
        // Data endpoints. Static segments take priority over `:start`.
        .route(
            "/api/v1.0/precipitation",
            get(handlers::precipitation::precipitation_handler),
        )
        .route(
            "/api/v1.0/stations",
            get(handlers::stations::stations_handler),
        )
        .route("/api/v1.0/tobs", get(handlers::tobs::tobs_handler))
        .route(
            "/api/v1.0/:start",
            get(handlers::temperature::start_handler),
        )
        .route(
            "/api/v1.0/:start/:end",
            get(handlers::temperature::start_end_handler),
        )
        // Health
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

/// Serve until Ctrl-C or SIGTERM, then close the database.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    let app = create_router(Arc::clone(&state));

    info!("Climate API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down");
    state.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
