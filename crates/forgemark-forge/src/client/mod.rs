//! Forge client for raw URL probing and star import.

mod resolve;
mod stars;

use crate::config::ForgeClientConfig;
use crate::error::ForgeResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ForgeConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default forge client using the reqwest HTTP backend.
pub type DefaultForgeClient = ForgeClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for talking to forges.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultForgeClient` for production code.
pub struct ForgeClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ForgeConfig,
}

impl DefaultForgeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ForgeClientConfig) -> ForgeResult<Self> {
        Self::with_backend(config, ReqwestBackend::new(config)?)
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> ForgeResult<Self> {
        Self::new(&ForgeClientConfig::default())
    }
}

impl<B: HttpBackend> ForgeClient<B> {
    /// Create a new client over a custom backend.
    ///
    /// The backend is responsible for honouring the configured user agent
    /// and timeout.
    pub fn with_backend(config: &ForgeClientConfig, backend: B) -> ForgeResult<Self> {
        Ok(Self {
            backend,
            config: ForgeConfig::from_public(config)?,
        })
    }
}
