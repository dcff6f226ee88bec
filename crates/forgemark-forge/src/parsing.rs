//! Conversion of star feed entries into domain identifiers.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use forgemark_core::RepoIdentifier;

use crate::error::{ForgeError, ForgeResult};
use crate::models::StarredRepo;

/// Timestamp layout used by the star feed.
const STARRED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a `starred_at` value. Only the exact UTC layout is accepted.
pub fn parse_starred_at(value: &str) -> ForgeResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, STARRED_AT_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|source| ForgeError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

/// Turn a feed entry into a `RepoIdentifier`.
pub fn to_identifier(entry: StarredRepo) -> ForgeResult<RepoIdentifier> {
    let starred_at = parse_starred_at(&entry.starred_at)?;
    Ok(RepoIdentifier::new(
        entry.repo.owner.login,
        entry.repo.name,
        starred_at,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RepoOwner, StarredRepoDetails};

    #[test]
    fn test_parse_starred_at() {
        let parsed = parse_starred_at("2023-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_starred_at_rejects_other_layouts() {
        for bad in [
            "",
            "2023-01-01",
            "2023-01-01 00:00:00",
            "2023-01-01T00:00:00+00:00",
            "2023-01-01T00:00:00.123Z",
            "2023-13-01T00:00:00Z",
        ] {
            assert!(
                matches!(parse_starred_at(bad), Err(ForgeError::InvalidTimestamp { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_identifier() {
        let entry = StarredRepo {
            starred_at: "2020-02-29T12:34:56Z".to_string(),
            repo: StarredRepoDetails {
                name: "bar".to_string(),
                owner: RepoOwner {
                    login: "foo".to_string(),
                },
            },
        };

        let id = to_identifier(entry).unwrap();

        assert_eq!(id.owner, "foo");
        assert_eq!(id.repository, "bar");
        assert_eq!(
            id.starred_at,
            Utc.with_ymd_and_hms(2020, 2, 29, 12, 34, 56).unwrap()
        );
    }
}
