/// Error types for the UKQ library
use thiserror::Error;

/// Main error type for FDSN event-query operations
#[derive(Error, Debug)]
pub enum FdsnError {
    /// HTTP request failed or timed out
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not well-formed JSON
    #[error("Failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// An expected field was absent or mistyped
    #[error("Missing or mistyped field: {0}")]
    Schema(String),

    /// Snapshot read or write failed
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// No events to aggregate over
    #[error("Catalog holds no events")]
    EmptyCatalog,
}

/// Type alias for Results using FdsnError
pub type Result<T> = std::result::Result<T, FdsnError>;
