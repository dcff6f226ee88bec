//! Internal API response types and configuration.
//!
//! These types are internal to `forgemark-forge` and are not exposed to consumers.
//! External consumers use the domain types defined in `forgemark-core`.

use std::collections::HashMap;

use forgemark_core::{Forge, ForgeTemplate};
use serde::Deserialize;
use url::Url;

use crate::config::ForgeClientConfig;
use crate::error::ForgeResult;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the forge client.
#[derive(Debug, Clone)]
pub struct ForgeConfig {
    /// Base URL for the GitHub REST API
    pub github_api_url: Url,
    /// Template overrides per forge
    pub templates: HashMap<Forge, ForgeTemplate>,
}

impl ForgeConfig {
    pub fn from_public(config: &ForgeClientConfig) -> ForgeResult<Self> {
        Ok(Self {
            github_api_url: Url::parse(&config.github_api_url)?,
            templates: config.templates.clone(),
        })
    }

    /// The template used for `forge`.
    pub fn template(&self, forge: Forge) -> ForgeTemplate {
        self.templates
            .get(&forge)
            .cloned()
            .unwrap_or_else(|| forge.template())
    }
}

// ============================================================================
// GitHub star feed
// ============================================================================

/// Media type that makes GitHub include `starred_at` in the starred feed.
pub const STAR_MEDIA_TYPE: &str = "application/vnd.github.v3.star+json";

/// One entry of `GET /users/{username}/starred` in the star media type.
#[derive(Debug, Clone, Deserialize)]
pub struct StarredRepo {
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub starred_at: String,
    pub repo: StarredRepoDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StarredRepoDetails {
    pub name: String,
    pub owner: RepoOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}
