//! Error types for backend requests.

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Backend error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request error (connection refused, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with a non-success status code.
    #[error("Backend returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error reported in the body, or the canonical reason phrase.
        message: String,
    },

    /// URL parsing error (including an empty, origin-less base).
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
}

impl Error {
    /// Creates a status error from a code and message.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Returns true if the request never produced a response.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::UrlError(_))
    }
}
