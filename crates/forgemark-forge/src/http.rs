//! HTTP backend abstraction for forge requests.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Every request is attempted exactly once.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue, LINK};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ForgeClientConfig;
use crate::error::{ForgeError, ForgeResult};
use crate::link::parse_next_link;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// One page of a paginated JSON listing.
#[derive(Debug)]
pub struct Page<T> {
    /// Decoded body
    pub items: T,
    /// Where the next page lives, from the `Link` header
    pub next: Option<Url>,
}

/// Trait for HTTP backends used by the forge client.
///
/// Most callers want `ReqwestBackend`; a custom backend plugs in through
/// `ForgeClient::with_backend`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send a `HEAD` request, following redirects, and return the final status.
    ///
    /// Errors only when no response was received at all.
    async fn head(&self, url: &Url) -> ForgeResult<u16>;

    /// Fetch one page of JSON sent with the given `Accept` media type.
    ///
    /// Non-success statuses are errors.
    async fn get_json_page<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        accept: &str,
    ) -> ForgeResult<Page<T>>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// The user agent and timeout come from the client configuration and apply
/// to every request. Redirects are followed with reqwest's default policy.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ForgeClientConfig) -> ForgeResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client })
    }
}

fn transport_error(url: &Url, err: &reqwest::Error) -> ForgeError {
    ForgeError::Transport {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn head(&self, url: &Url) -> ForgeResult<u16> {
        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        Ok(response.status().as_u16())
    }

    async fn get_json_page<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        accept: &str,
    ) -> ForgeResult<Page<T>> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForgeError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let next = next_page_url(url, response.headers().get(LINK))?;

        let body = response.bytes().await?;
        let items: T = serde_json::from_slice(&body)?;
        Ok(Page { items, next })
    }
}

/// Resolve the `rel="next"` target of a `Link` header against the page URL.
///
/// A header that is present but unreadable is an error rather than the end of
/// the listing.
fn next_page_url(page: &Url, link: Option<&HeaderValue>) -> ForgeResult<Option<Url>> {
    let Some(link) = link else {
        return Ok(None);
    };
    let link = link.to_str().map_err(|e| ForgeError::InvalidResponse {
        message: format!("unreadable Link header from {page}: {e}"),
    })?;

    parse_next_link(link)
        .map(|target| {
            page.join(target).map_err(|e| ForgeError::InvalidResponse {
                message: format!("bad next page link {target:?} from {page}: {e}"),
            })
        })
        .transpose()
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
