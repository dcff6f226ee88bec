//! Internal error types for forge operations.
//!
//! These errors are internal to `forgemark-forge` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for forge operations.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Errors related to forge HTTP operations.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// The request got an HTTP error status back.
    #[error("Request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The request never produced a response (DNS, connection, timeout).
    #[error("Request to {url} failed: {reason}")]
    Transport {
        /// The URL that was requested
        url: String,
        /// What went wrong
        reason: String,
    },

    /// The API returned an invalid or unexpected response.
    #[error("Invalid response from forge API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// A star timestamp didn't match `YYYY-MM-DDTHH:MM:SSZ`.
    #[error("Invalid star timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// The offending value
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// HTTP client error outside of sending (client setup, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ForgeError {
    /// Whether the request failed before any HTTP response arrived.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Network(_))
    }
}
