//! URL construction helpers for the GitHub API.

use url::Url;

use crate::models::ForgeConfig;

/// Build the first page URL of a user's starred-repository feed.
pub fn build_starred_url(config: &ForgeConfig, username: &str) -> Url {
    let mut url = config.github_api_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!(
        "{base_path}/users/{}/starred",
        urlencoding::encode(username)
    ));

    url
}
