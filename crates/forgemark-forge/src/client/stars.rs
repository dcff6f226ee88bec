//! GitHub starred-repository import.

use std::collections::HashSet;

use forgemark_core::RepoIdentifier;

use crate::error::ForgeResult;
use crate::http::{HttpBackend, Page};
use crate::models::{STAR_MEDIA_TYPE, StarredRepo};
use crate::parsing::to_identifier;
use crate::url::build_starred_url;

use super::ForgeClient;

impl<B: HttpBackend> ForgeClient<B> {
    /// Fetch the repositories `username` starred, following `Link` pagination.
    ///
    /// Stops as soon as `limit` identifiers are collected, even mid-page, and
    /// never requests a page beyond that point. Any failure discards what was
    /// collected so far. A `next` link pointing back at a page already read
    /// ends the listing.
    pub async fn fetch_stars(
        &self,
        username: &str,
        limit: Option<usize>,
    ) -> ForgeResult<Vec<RepoIdentifier>> {
        if limit == Some(0) {
            return Ok(Vec::new());
        }

        let mut stars = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(build_starred_url(&self.config, username));

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                tracing::warn!(username, url = %url, "Star pages link back to an earlier page, stopping");
                break;
            }

            let page: Page<Vec<StarredRepo>> =
                self.backend.get_json_page(&url, STAR_MEDIA_TYPE).await?;
            tracing::debug!(url = %url, items = page.items.len(), "Fetched star page");

            for entry in page.items {
                stars.push(to_identifier(entry)?);
                if limit.is_some_and(|limit| stars.len() >= limit) {
                    tracing::debug!(username, count = stars.len(), "Star limit reached");
                    return Ok(stars);
                }
            }

            next = page.next;
        }

        tracing::debug!(username, count = stars.len(), "Star feed exhausted");
        Ok(stars)
    }
}
