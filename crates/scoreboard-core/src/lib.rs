//! Core types for the scoreboard service.
//!
//! This crate defines the shape of a persisted score entry and the rules a
//! submission must satisfy before it is handed to a store:
//!
//! - **Identifiers**: `ScoreId`
//! - **Records**: `ScoreRecord`, `ScoreSubmission`, `NewScore`
//! - **Errors**: `ValidationError`, `IdError`
//!
//! # Wire format
//!
//! Records serialize with the field names the document store uses:
//!
//! ```json
//! { "_id": "65f1c0ffee0000000000beef", "name": "Alice", "score": 10.0,
//!   "date": "2024-03-13T12:00:00.000Z", "__v": 0 }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod score;

pub use error::{IdError, ValidationError};
pub use ids::ScoreId;
pub use score::{NewScore, ScoreRecord, ScoreSubmission};
