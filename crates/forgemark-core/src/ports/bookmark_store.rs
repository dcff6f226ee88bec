//! Bookmark store trait definition.
//!
//! This port defines the interface for bookmark persistence.
//! Implementations handle all storage details internally.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Bookmark;
use crate::paths::PathError;

/// Errors from bookmark persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store location couldn't be resolved.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Reading the bookmark file failed.
    #[error("Failed to read bookmarks from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the bookmark file failed.
    #[error("Failed to write bookmarks to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bookmark file isn't a JSON array of `[title, location, date]` records.
    #[error("Malformed bookmark file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing bookmarks failed.
    #[error("Failed to encode bookmarks: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Repository for a full set of bookmarks.
///
/// # Design Rules
///
/// - Works with the domain `Bookmark` type directly
/// - `save` replaces everything; there are no partial updates
/// - `load` of a store that was never written returns an empty list
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Load all bookmarks.
    async fn load(&self) -> Result<Vec<Bookmark>, StoreError>;

    /// Replace the stored bookmarks with `bookmarks`.
    async fn save(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError>;
}
