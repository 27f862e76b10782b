//! Error types for gb-core

use thiserror::Error;

/// Main error type for gb-core
///
/// The dialogue path itself never fails (every input yields a textual
/// reply); errors exist only for configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for gb-core
pub type Result<T> = std::result::Result<T, Error>;
