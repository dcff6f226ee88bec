//! Forge client port trait.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::domain::{Forge, RepoIdentifier};

/// Errors from forge port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum ForgePortError {
    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The forge answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// A star timestamp didn't match `YYYY-MM-DDTHH:MM:SSZ`.
    #[error("Invalid star timestamp: {value:?}")]
    InvalidTimestamp {
        /// The offending value
        value: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for forge port operations.
pub type ForgePortResult<T> = Result<T, ForgePortError>;

/// Port trait for forge operations.
///
/// The implementation lives in `forgemark-forge`.
#[async_trait]
pub trait ForgeClientPort: Send + Sync {
    /// Fetch the repositories `username` starred on GitHub, newest feed order
    /// preserved, stopping once `limit` items have been collected.
    ///
    /// Any failure aborts the whole import; partial lists are never returned.
    async fn fetch_stars(
        &self,
        username: &str,
        limit: Option<usize>,
    ) -> ForgePortResult<Vec<RepoIdentifier>>;

    /// Find the raw URL of `file` (default `README.md`) in a repository.
    ///
    /// Without a branch, `main` then `master` are probed. Returns `None` when
    /// no candidate exists or the forge can't be reached.
    async fn resolve_raw_url(
        &self,
        forge: Forge,
        owner: &str,
        repository: &str,
        branch: Option<&str>,
        file: Option<&str>,
    ) -> Option<Url>;
}
