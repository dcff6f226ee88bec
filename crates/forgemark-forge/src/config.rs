//! Public configuration for the forge client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::collections::HashMap;
use std::time::Duration;

use forgemark_core::{Forge, ForgeTemplate};

/// Default base URL of the GitHub REST API.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Configuration for the forge client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use forgemark_forge::ForgeClientConfig;
/// use forgemark_core::Forge;
/// use std::time::Duration;
///
/// let config = ForgeClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0")
///     .with_template(Forge::GitLab, "https://git.example.com/{owner}/{repository}/-/raw/{branch}/{file}");
/// ```
#[derive(Debug, Clone)]
pub struct ForgeClientConfig {
    /// Base URL for the GitHub REST API
    pub(crate) github_api_url: String,
    /// User agent string sent with every request
    pub(crate) user_agent: String,
    /// Per-request timeout enforced by the HTTP client
    pub(crate) timeout: Duration,
    /// Raw-content templates replacing the built-in ones
    pub(crate) templates: HashMap<Forge, ForgeTemplate>,
}

impl Default for ForgeClientConfig {
    fn default() -> Self {
        Self {
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            user_agent: concat!("forgemark/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            templates: HashMap::new(),
        }
    }
}

impl ForgeClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the GitHub REST API.
    ///
    /// Defaults to `https://api.github.com`.
    #[must_use]
    pub fn with_github_api_url(mut self, url: impl Into<String>) -> Self {
        self.github_api_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom raw-content template for `forge`.
    #[must_use]
    pub fn with_template(mut self, forge: Forge, pattern: impl Into<String>) -> Self {
        self.templates.insert(forge, ForgeTemplate::new(pattern));
        self
    }
}
