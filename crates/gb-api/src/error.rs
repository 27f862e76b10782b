//! Error types for gb-api

use thiserror::Error;

/// gb-api error type
///
/// The dialogue endpoints themselves never fail; only binding and serving
/// the listener can.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gb-api
pub type Result<T> = std::result::Result<T, ApiError>;
