//! Storage layer for the scoreboard service.
//!
//! Score records live in a single `scores` collection of an external
//! document store. The service only ever reads the whole collection or
//! appends one record to it.
//!
//! # Backends
//!
//! - `MongoStore`: the production backend. Constructed without I/O and
//!   connected later, so a listener can come up before the database does.
//! - `MemoryStore`: keeps records in process, for tests and local runs.
//!
//! # Example
//!
//! ```no_run
//! use scoreboard_core::ScoreSubmission;
//! use scoreboard_store::{MongoStore, ScoreStore};
//!
//! # async fn example() -> scoreboard_store::Result<()> {
//! let store = MongoStore::new("mongodb://localhost:27017/scoreboard", None);
//! store.connect().await?;
//!
//! let candidate = ScoreSubmission::new("Alice", 10.0)
//!     .validate(chrono::Utc::now())
//!     .expect("valid submission");
//! let record = store.create(candidate).await?;
//! println!("stored {}", record.id);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;
pub mod mongo;
pub mod schema;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use scoreboard_core::{NewScore, ScoreRecord};

/// The storage trait for score records.
///
/// Handlers receive an implementation through application state, so tests
/// can substitute `MemoryStore` for the document store.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// List every stored record in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or the query fails.
    async fn find_all(&self) -> Result<Vec<ScoreRecord>>;

    /// Persist a validated score and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or the write fails.
    async fn create(&self, score: NewScore) -> Result<ScoreRecord>;

    /// Check that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    async fn ping(&self) -> Result<()>;
}
