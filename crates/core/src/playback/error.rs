use thiserror::Error;

/// Errors that can occur in the local playback store.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Unsupported playback speed: {0}")]
    InvalidSpeed(f64),
    #[error("Invalid playback position: {0}")]
    InvalidPosition(f64),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
