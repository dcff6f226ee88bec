//! Starred repository identifiers.

use chrono::{DateTime, Utc};
use std::fmt;

/// A repository the user starred, as reported by the star feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentifier {
    /// Account or organization owning the repository
    pub owner: String,
    /// Repository name
    pub repository: String,
    /// When the star was created
    pub starred_at: DateTime<Utc>,
}

impl RepoIdentifier {
    pub fn new(
        owner: impl Into<String>,
        repository: impl Into<String>,
        starred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repository: repository.into(),
            starred_at,
        }
    }

    /// `owner/repository`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repository)
    }
}

impl fmt::Display for RepoIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_full_name() {
        let starred_at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let repo = RepoIdentifier::new("foo", "bar", starred_at);
        assert_eq!(repo.full_name(), "foo/bar");
        assert_eq!(repo.to_string(), "foo/bar");
    }
}
