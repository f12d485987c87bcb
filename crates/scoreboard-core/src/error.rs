//! Error types for scoreboard core.

/// Reasons a score submission is rejected before it reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` was absent or empty.
    #[error("name is required")]
    MissingName,

    /// `score` was absent.
    #[error("score is required")]
    MissingScore,

    /// `score` was NaN or infinite.
    #[error("score must be a finite number")]
    NonFiniteScore,
}

/// Error parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// Not a 24-character hexadecimal object id.
    #[error("invalid object id: {0}")]
    InvalidObjectId(String),
}
