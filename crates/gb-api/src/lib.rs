//! gb-api: HTTP API for the guess bot gateway
//!
//! Thin I/O plumbing over the dialogue router: JSON in, JSON out.
//! Built with axum for async HTTP handling.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::{ApiError, Result};
pub use server::{start_server, AppState};
