//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading a rating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
