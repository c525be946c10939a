//! Configuration error types.

use thiserror::Error;

/// Configuration error.
///
/// Building the record never fails; these come from the metadata boundary,
/// pipeline checks, and the database bridge.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("invalid database options: {0}")]
    Database(#[from] sqlx::Error),
}
