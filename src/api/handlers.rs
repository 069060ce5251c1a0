//! HTTP endpoint handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, warn};

use super::responses::{ApiResponse, ErrorResponse, HealthResponse};
use crate::host::{HostCommand, HostError, HostHandle};

/// Rejected command, rendered as a JSON error with a matching status code
pub struct ApiError(HostError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self.0 {
            HostError::Lifecycle(_) | HostError::AlreadyOpen | HostError::NoScreen => {
                StatusCode::CONFLICT
            }
            HostError::Closed => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (code, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}

impl From<HostError> for ApiError {
    fn from(e: HostError) -> Self {
        Self(e)
    }
}

async fn run_command(host: &HostHandle, command: HostCommand) -> Result<Json<ApiResponse>, ApiError> {
    match host.send(command).await {
        Ok(screen) => {
            info!("{} applied", command.name());
            Ok(Json(ApiResponse::for_timer(
                format!("{} applied", command.name()),
                screen,
            )))
        }
        Err(HostError::Closed) => {
            error!("Host is gone, cannot apply {}", command.name());
            Err(HostError::Closed.into())
        }
        Err(e) => {
            warn!("Failed to apply {}: {}", command.name(), e);
            Err(e.into())
        }
    }
}

/// Handle POST /start-pause - Toggle the timer
pub async fn start_pause_handler(State(host): State<HostHandle>) -> Result<Json<ApiResponse>, ApiError> {
    run_command(&host, HostCommand::StartPause).await
}

/// Handle POST /stop - End the session and save it
pub async fn stop_handler(State(host): State<HostHandle>) -> Result<Json<ApiResponse>, ApiError> {
    run_command(&host, HostCommand::Stop).await
}

/// Handle POST /lifecycle/:event - Deliver a platform lifecycle sequence
pub async fn lifecycle_handler(
    State(host): State<HostHandle>,
    Path(event): Path<String>,
) -> Result<Json<ApiResponse>, Response> {
    let Some(command) = HostCommand::from_lifecycle_event(&event) else {
        warn!("Unknown lifecycle event: {}", event);
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("Unknown lifecycle event: {}", event))),
        )
            .into_response());
    };

    run_command(&host, command).await.map_err(IntoResponse::into_response)
}

/// Handle GET /status - Return the current screen
pub async fn status_handler(State(host): State<HostHandle>) -> Result<Json<ApiResponse>, ApiError> {
    let screen = host.status().await.map_err(|e| {
        error!("Failed to get status: {}", e);
        ApiError::from(e)
    })?;
    Ok(Json(ApiResponse::for_timer("current status".to_string(), screen)))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
