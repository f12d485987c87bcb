//! Scoreboard HTTP API Service.
//!
//! This crate provides the HTTP API for submitting and listing scores:
//!
//! - `GET /scores` - every stored score record
//! - `POST /scores` - submit a `{name, score}` pair
//! - `GET /health` - liveness and backend status
//!
//! The store is injected through [`AppState`], so the router can be driven
//! against any [`scoreboard_store::ScoreStore`] implementation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are async for Axum's Handler trait

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServiceConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
