//! API response structures

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::host::StatusSnapshot;

/// Response for endpoints that change the screen
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub screen: StatusSnapshot,
}

impl ApiResponse {
    pub fn new(status: &str, message: String, screen: StatusSnapshot) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            screen,
        }
    }

    /// Response reflecting the timer's running flag
    pub fn for_timer(message: String, screen: StatusSnapshot) -> Self {
        let running = screen.timer.is_some_and(|timer| timer.running);
        Self::new(if running { "running" } else { "paused" }, message, screen)
    }
}

/// Error body for rejected commands
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
