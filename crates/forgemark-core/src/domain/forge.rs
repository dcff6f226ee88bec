//! Supported forges and their raw-content URL templates.

use std::borrow::Cow;
use std::fmt;

/// File looked up when the caller doesn't name one.
pub const DEFAULT_FILE: &str = "README.md";

/// A source-code hosting platform with a raw-content endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Forge {
    GitHub,
    GitLab,
    Bitbucket,
    Codeberg,
}

impl Forge {
    /// All supported forges.
    pub const ALL: [Self; 4] = [Self::GitHub, Self::GitLab, Self::Bitbucket, Self::Codeberg];

    /// The built-in raw-content template for this forge.
    pub const fn template(self) -> ForgeTemplate {
        let pattern = match self {
            Self::GitHub => "https://raw.githubusercontent.com/{owner}/{repository}/{branch}/{file}",
            Self::GitLab => "https://gitlab.com/{owner}/{repository}/-/raw/{branch}/{file}",
            Self::Bitbucket => "https://bitbucket.org/{owner}/{repository}/raw/{branch}/{file}",
            // Codeberg really does want the empty segment before `branch`.
            Self::Codeberg => "https://codeberg.org/{owner}/{repository}/raw//branch/{branch}/{file}",
        };
        ForgeTemplate(Cow::Borrowed(pattern))
    }

    /// Human-readable name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::GitLab => "GitLab",
            Self::Bitbucket => "Bitbucket",
            Self::Codeberg => "Codeberg",
        }
    }
}

impl fmt::Display for Forge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL pattern with `{owner}`, `{repository}`, `{branch}` and `{file}` placeholders.
///
/// Substitution is purely textual. Nothing is escaped, so the rendered
/// string is exactly what the pattern and arguments spell out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForgeTemplate(Cow<'static, str>);

impl ForgeTemplate {
    /// Create a template from a custom pattern (self-hosted forges, test servers).
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(Cow::Owned(pattern.into()))
    }

    /// The raw pattern.
    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Substitute all four placeholders.
    pub fn render(&self, owner: &str, repository: &str, branch: &str, file: &str) -> String {
        self.0
            .replace("{owner}", owner)
            .replace("{repository}", repository)
            .replace("{branch}", branch)
            .replace("{file}", file)
    }
}

impl From<Forge> for ForgeTemplate {
    fn from(forge: Forge) -> Self {
        forge.template()
    }
}

impl fmt::Display for ForgeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
