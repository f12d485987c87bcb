//! Health check handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Backend reachability as seen by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    /// The store answered a ping.
    Connected,
    /// The store is not connected or did not answer.
    Unavailable,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Store status.
    pub store: StoreStatus,
}

/// Health check endpoint.
///
/// Always answers 200 while the listener is up; a degraded backend shows
/// up in `store`.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = match state.store.ping().await {
        Ok(()) => StoreStatus::Connected,
        Err(e) => {
            tracing::debug!(error = %e, "Store ping failed");
            StoreStatus::Unavailable
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        service: "scoreboard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store,
    })
}
