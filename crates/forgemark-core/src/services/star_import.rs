//! Star import service - turns GitHub stars into README bookmarks.

use std::sync::Arc;

use futures_util::future::join_all;
use thiserror::Error;
use url::Url;

use crate::domain::{Bookmark, BookmarkLocation, Forge, RepoIdentifier};
use crate::ports::{BookmarkStore, ForgeClientPort, ForgePortError, StoreError};

/// Errors from a star import run.
#[derive(Debug, Error)]
pub enum StarImportError {
    /// The star feed couldn't be read. Nothing was resolved.
    #[error("Failed to fetch starred repositories for '{username}': {source}")]
    StarFetch {
        username: String,
        #[source]
        source: ForgePortError,
    },

    /// Persisting the imported bookmarks failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service driving star import and raw URL resolution.
pub struct StarImportService {
    forge: Arc<dyn ForgeClientPort>,
}

impl StarImportService {
    /// Create a new star import service.
    pub fn new(forge: Arc<dyn ForgeClientPort>) -> Self {
        Self { forge }
    }

    /// Resolve the GitHub README URL of every repository `username` starred.
    ///
    /// The result has one slot per star, in feed order. A slot is `None`
    /// when no README could be found for that repository.
    pub async fn import_github_stars(
        &self,
        username: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Option<Url>>, StarImportError> {
        let stars = self.fetch_stars(username, limit).await?;
        Ok(self.resolve_readmes(&stars).await)
    }

    /// Import stars as bookmarks titled `owner/repository`.
    ///
    /// Repositories without a resolvable README are left out.
    pub async fn import_bookmarks(
        &self,
        username: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Bookmark>, StarImportError> {
        let stars = self.fetch_stars(username, limit).await?;
        let urls = self.resolve_readmes(&stars).await;

        let bookmarks: Vec<Bookmark> = stars
            .into_iter()
            .zip(urls)
            .filter_map(|(repo, url)| {
                url.map(|url| Bookmark {
                    title: repo.full_name(),
                    location: BookmarkLocation::Remote(url),
                    date_starred: repo.starred_at,
                })
            })
            .collect();

        tracing::info!(
            username,
            bookmarks = bookmarks.len(),
            "Imported GitHub stars as bookmarks"
        );
        Ok(bookmarks)
    }

    /// Import bookmarks and replace the contents of `store` with them.
    pub async fn sync_bookmarks(
        &self,
        username: &str,
        limit: Option<usize>,
        store: &dyn BookmarkStore,
    ) -> Result<Vec<Bookmark>, StarImportError> {
        let bookmarks = self.import_bookmarks(username, limit).await?;
        store.save(&bookmarks).await?;
        Ok(bookmarks)
    }

    async fn fetch_stars(
        &self,
        username: &str,
        limit: Option<usize>,
    ) -> Result<Vec<RepoIdentifier>, StarImportError> {
        tracing::info!(username, ?limit, "Importing GitHub stars");

        self.forge
            .fetch_stars(username, limit)
            .await
            .map_err(|source| {
                tracing::warn!(username, error = %source, "Star import failed");
                StarImportError::StarFetch {
                    username: username.to_string(),
                    source,
                }
            })
    }

    /// Probe every repository concurrently on the current task.
    ///
    /// `join_all` yields outputs in input order whatever the completion order.
    async fn resolve_readmes(&self, stars: &[RepoIdentifier]) -> Vec<Option<Url>> {
        let forge = self.forge.as_ref();
        let urls = join_all(stars.iter().map(|repo| {
            forge.resolve_raw_url(Forge::GitHub, &repo.owner, &repo.repository, None, None)
        }))
        .await;

        let resolved = urls.iter().filter(|url| url.is_some()).count();
        tracing::info!(
            repositories = stars.len(),
            resolved,
            "Resolved README URLs"
        );
        urls
    }
}
