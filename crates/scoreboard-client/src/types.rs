//! Request and response types for the scoreboard API.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Store status (`connected` or `unavailable`).
    pub store: String,
}

impl HealthResponse {
    /// Whether the service reports a reachable store.
    #[must_use]
    pub fn store_connected(&self) -> bool {
        self.store == "connected"
    }
}

/// JSON error body returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error message.
    pub error: String,
}
