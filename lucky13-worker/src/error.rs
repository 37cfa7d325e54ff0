//! Error types for the stub server
//!
//! Uses thiserror for ergonomic error definitions.
//! Route handlers convert these into `worker::Error` with `?`.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, WorkerError>;

/// Stub server errors
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected request bodies
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Worker runtime errors
    #[error("Worker error: {0}")]
    Worker(String),

    /// KV storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<worker::Error> for WorkerError {
    fn from(err: worker::Error) -> Self {
        WorkerError::Worker(err.to_string())
    }
}

impl From<WorkerError> for worker::Error {
    fn from(err: WorkerError) -> Self {
        worker::Error::RustError(err.to_string())
    }
}
