//! Port trait implementation for `ForgeClient`.
//!
//! This module implements the core-owned `ForgeClientPort` trait for
//! `ForgeClient`, mapping internal errors to port errors.

use async_trait::async_trait;
use forgemark_core::{Forge, ForgeClientPort, ForgePortError, ForgePortResult, RepoIdentifier};
use url::Url;

use crate::client::ForgeClient;
use crate::error::ForgeError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ForgeError` to core `ForgePortError`.
fn map_error(err: ForgeError) -> ForgePortError {
    match err {
        ForgeError::ApiRequestFailed { status, url } => ForgePortError::HttpStatus { status, url },
        ForgeError::Transport { url, reason } => ForgePortError::Network {
            message: format!("{url}: {reason}"),
        },
        ForgeError::Network(e) => ForgePortError::Network {
            message: e.to_string(),
        },
        ForgeError::InvalidResponse { message } => ForgePortError::InvalidResponse { message },
        ForgeError::InvalidTimestamp { value, .. } => ForgePortError::InvalidTimestamp { value },
        ForgeError::InvalidUrl(e) => ForgePortError::Configuration {
            message: e.to_string(),
        },
        ForgeError::JsonParse(e) => ForgePortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ForgeClientPort for ForgeClient<B> {
    async fn fetch_stars(
        &self,
        username: &str,
        limit: Option<usize>,
    ) -> ForgePortResult<Vec<RepoIdentifier>> {
        ForgeClient::fetch_stars(self, username, limit)
            .await
            .map_err(map_error)
    }

    async fn resolve_raw_url(
        &self,
        forge: Forge,
        owner: &str,
        repository: &str,
        branch: Option<&str>,
        file: Option<&str>,
    ) -> Option<Url> {
        self.resolve_forge_url(forge, owner, repository, branch, file)
            .await
    }
}
