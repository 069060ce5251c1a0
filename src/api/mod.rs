//! HTTP API module
//!
//! Local control surface for the host: taps, lifecycle events and status.

pub mod handlers;
pub mod responses;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::host::HostHandle;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(host: HostHandle) -> Router {
    Router::new()
        .route("/start-pause", post(start_pause_handler))
        .route("/stop", post(stop_handler))
        .route("/lifecycle/:event", post(lifecycle_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(host)
}
