//! Error types for the core library.

use thiserror::Error;

/// Errors from persisting client state.
///
/// Backend failures never surface here: they become submission outcomes or
/// health reports.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
