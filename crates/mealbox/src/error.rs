//! Error types for mealbox services
//!
//! Distinguishes a missing record (not an error) from a record that exists
//! but cannot be decoded, and read failures from write failures.

use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A stored record exists but does not decode
    #[error("Corrupt state under key '{key}': {source}")]
    CorruptState {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read key '{key}': {source}")]
    PersistenceReadFailure {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write key '{key}': {source}")]
    PersistenceWriteFailure {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether this error means the stored record could not be decoded
    pub fn is_corrupt_state(&self) -> bool {
        matches!(self, AppError::CorruptState { .. })
    }
}

/// Result type alias for mealbox services
pub type Result<T> = std::result::Result<T, AppError>;
