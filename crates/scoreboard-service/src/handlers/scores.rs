//! Score submission and listing handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use scoreboard_core::{ScoreRecord, ScoreSubmission};

use crate::error::ApiError;
use crate::state::AppState;

/// List every stored score.
pub async fn list_scores(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ScoreRecord>>, ApiError> {
    tracing::info!("GET /scores was hit");

    let scores = state.store.find_all().await.map_err(ApiError::ListScores)?;

    tracing::debug!(count = scores.len(), "Listed scores");

    Ok(Json(scores))
}

/// Submit a score.
///
/// The body is parsed leniently so that a missing or mistyped field is
/// reported as a rejected submission rather than a framework error.
pub async fn create_score(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ScoreSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<ScoreRecord>), ApiError> {
    let Json(submission) = body?;
    let candidate = submission.validate(Utc::now())?;

    let record = state
        .store
        .create(candidate)
        .await
        .map_err(ApiError::SaveScore)?;

    tracing::info!(
        id = %record.id,
        name = %record.name,
        score = record.score,
        "Score recorded"
    );

    Ok((StatusCode::CREATED, Json(record)))
}
