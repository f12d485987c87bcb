//! Scoreboard Client SDK.
//!
//! This crate provides a typed client for the scoreboard HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use scoreboard_client::ScoreboardClient;
//!
//! # async fn example() -> Result<(), scoreboard_client::ClientError> {
//! let client = ScoreboardClient::new("http://localhost:4000")?;
//!
//! let record = client.submit_score("Alice", 10.0).await?;
//! println!("Stored {} with id {}", record.name, record.id);
//!
//! for score in client.list_scores().await? {
//!     println!("{}: {}", score.name, score.score);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, ScoreboardClient};
pub use error::ClientError;
pub use scoreboard_core::{ScoreRecord, ScoreSubmission};
pub use types::*;
