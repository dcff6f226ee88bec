//! JSON file implementation of `BookmarkStore`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::fs;

use crate::domain::Bookmark;
use crate::paths::github_stars_path;
use crate::ports::{BookmarkStore, StoreError};

/// Bookmarks kept in a single JSON file.
///
/// The file holds an array of `[title, location, date_starred]` records,
/// indented with four spaces.
#[derive(Debug, Clone)]
pub struct JsonBookmarkStore {
    path: PathBuf,
}

impl JsonBookmarkStore {
    /// Store backed by an explicit file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for a user's imported GitHub stars inside the data root.
    pub fn for_github_user(username: &str) -> Result<Self, StoreError> {
        Ok(Self::new(github_stars_path(username)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(bookmarks: &[Bookmark]) -> Result<Vec<u8>, StoreError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        bookmarks
            .serialize(&mut serializer)
            .map_err(StoreError::Encode)?;
        Ok(buf)
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl BookmarkStore for JsonBookmarkStore {
    async fn load(&self) -> Result<Vec<Bookmark>, StoreError> {
        let contents = match fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No bookmark file yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let bookmarks: Vec<Bookmark> =
            serde_json::from_slice(&contents).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            count = bookmarks.len(),
            "Loaded bookmarks"
        );
        Ok(bookmarks)
    }

    async fn save(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        let encoded = Self::encode(bookmarks)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        // Write next to the target and rename so a crash never leaves half a file.
        let staging = self.path.with_extension("json.tmp");
        let written = match fs::write(&staging, &encoded).await {
            Ok(()) => fs::rename(&staging, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&staging).await {
                tracing::debug!(path = %staging.display(), error = %cleanup, "Staging file not removed");
            }
            return Err(self.write_error(e));
        }

        tracing::info!(
            path = %self.path.display(),
            count = bookmarks.len(),
            "Saved bookmarks"
        );
        Ok(())
    }
}
