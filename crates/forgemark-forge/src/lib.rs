#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod link;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultForgeClient, ForgeClient};
pub use http::{HttpBackend, Page, ReqwestBackend};

// Configuration
pub use config::{DEFAULT_GITHUB_API_URL, ForgeClientConfig};

// Errors
pub use error::{ForgeError, ForgeResult};

// Silence unused dev-dependency warnings; these are used by integration tests
#[cfg(test)]
use mockito as _;
#[cfg(test)]
use tracing_subscriber as _;
