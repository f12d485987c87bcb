//! Error types for scoreboard storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend has not been connected yet.
    #[error("database not connected")]
    NotConnected,

    /// Connecting to the backend failed.
    #[error("connection error: {0}")]
    Connection(String),

    /// Query or write failed.
    #[error("database error: {0}")]
    Database(String),

    /// A stored document did not match the record shape.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(err.to_string())
    }
}
