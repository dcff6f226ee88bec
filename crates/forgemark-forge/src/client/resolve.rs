//! Raw URL resolution: branch guessing plus `HEAD` probing.

use forgemark_core::{DEFAULT_FILE, Forge, ForgeTemplate};
use url::Url;

use crate::http::HttpBackend;

use super::ForgeClient;

/// Branches tried, in order, when the caller doesn't name one.
pub const DEFAULT_BRANCHES: [&str; 2] = ["main", "master"];

/// What a single probe learned about a candidate.
enum Probe {
    /// Success status; this is the URL.
    Found(Url),
    /// The forge answered but the file isn't there.
    Missing,
    /// No answer at all. Other candidates would fail the same way.
    Unreachable,
}

impl<B: HttpBackend> ForgeClient<B> {
    /// Find the raw URL of `file` (default `README.md`) using `template`.
    ///
    /// With `branch` given, only that branch is probed. Otherwise `main` and
    /// then `master`. The first candidate answering with a success status wins.
    /// A transport failure ends the search immediately with `None`.
    pub async fn resolve(
        &self,
        template: &ForgeTemplate,
        owner: &str,
        repository: &str,
        branch: Option<&str>,
        file: Option<&str>,
    ) -> Option<Url> {
        let file = file.unwrap_or(DEFAULT_FILE);
        let candidates = branch.map_or_else(|| DEFAULT_BRANCHES.to_vec(), |b| vec![b]);

        for candidate in candidates {
            let raw = template.render(owner, repository, candidate, file);
            match self.probe(&raw).await {
                Probe::Found(url) => return Some(url),
                Probe::Missing => {}
                Probe::Unreachable => return None,
            }
        }

        tracing::debug!(owner, repository, file, "No raw URL found");
        None
    }

    /// Resolve against the configured template of `forge`.
    pub async fn resolve_forge_url(
        &self,
        forge: Forge,
        owner: &str,
        repository: &str,
        branch: Option<&str>,
        file: Option<&str>,
    ) -> Option<Url> {
        let template = self.config.template(forge);
        self.resolve(&template, owner, repository, branch, file).await
    }

    /// Resolve a raw.githubusercontent.com URL.
    pub async fn resolve_github_url(
        &self,
        owner: &str,
        repository: &str,
        branch: Option<&str>,
        file: Option<&str>,
    ) -> Option<Url> {
        self.resolve_forge_url(Forge::GitHub, owner, repository, branch, file)
            .await
    }

    /// Resolve a gitlab.com raw URL.
    pub async fn resolve_gitlab_url(
        &self,
        owner: &str,
        repository: &str,
        branch: Option<&str>,
        file: Option<&str>,
    ) -> Option<Url> {
        self.resolve_forge_url(Forge::GitLab, owner, repository, branch, file)
            .await
    }

    /// Resolve a bitbucket.org raw URL.
    pub async fn resolve_bitbucket_url(
        &self,
        owner: &str,
        repository: &str,
        branch: Option<&str>,
        file: Option<&str>,
    ) -> Option<Url> {
        self.resolve_forge_url(Forge::Bitbucket, owner, repository, branch, file)
            .await
    }

    /// Resolve a codeberg.org raw URL.
    pub async fn resolve_codeberg_url(
        &self,
        owner: &str,
        repository: &str,
        branch: Option<&str>,
        file: Option<&str>,
    ) -> Option<Url> {
        self.resolve_forge_url(Forge::Codeberg, owner, repository, branch, file)
            .await
    }

    async fn probe(&self, raw: &str) -> Probe {
        // A template that renders to garbage can't be reached either.
        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(url = raw, error = %e, "Candidate is not a valid URL");
                return Probe::Unreachable;
            }
        };

        match self.backend.head(&url).await {
            Ok(status) if (200..300).contains(&status) => {
                tracing::debug!(url = %url, status, "Candidate exists");
                Probe::Found(url)
            }
            Ok(status) => {
                tracing::debug!(url = %url, status, "Candidate missing");
                Probe::Missing
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Probe failed, giving up");
                Probe::Unreachable
            }
        }
    }
}
