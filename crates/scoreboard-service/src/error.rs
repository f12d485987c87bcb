//! API error types and responses.
//!
//! Status codes and bodies are part of the wire contract:
//!
//! | Error | Status | Body |
//! |---|---|---|
//! | invalid submission | 400 | `{"error":"Name and score are required"}` |
//! | body too large | 413 | `{"error":"Payload too large"}` |
//! | listing failed | 500 | `Server error: <detail>` (plain text) |
//! | insert failed | 500 | `{"error":"Server error"}` |

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use scoreboard_core::ValidationError;
use scoreboard_store::StoreError;

/// Body returned for rejected submissions.
pub const MISSING_FIELDS_MESSAGE: &str = "Name and score are required";

/// Body returned when an insert fails.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The submission is missing a field or could not be parsed.
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),

    /// The request body exceeded the configured limit.
    #[error("payload too large")]
    PayloadTooLarge,

    /// Reading the score list failed.
    #[error("failed to list scores: {0}")]
    ListScores(#[source] StoreError),

    /// Persisting a score failed.
    #[error("failed to save score: {0}")]
    SaveScore(#[source] StoreError),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSubmission(reason) => {
                tracing::debug!(reason = %reason, "Rejected score submission");
                json_error(StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
            }
            Self::PayloadTooLarge => json_error(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large"),
            Self::ListScores(err) => {
                tracing::error!(error = %err, "Failed to list scores");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Server error: {err}"),
                )
                    .into_response()
            }
            Self::SaveScore(err) => {
                tracing::error!(error = %err, "Failed to save score");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
            }
        }
    }
}

fn json_error(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidSubmission(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge;
        }
        Self::InvalidSubmission(rejection.body_text())
    }
}
