//! Bookmark domain types.
//!
//! A bookmark points either at a remote document (usually a raw README URL
//! produced by a star import) or at a markdown file on the local disk.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

/// Where a bookmark points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkLocation {
    /// A remote document
    Remote(Url),
    /// A file on the local filesystem
    Local(PathBuf),
}

impl BookmarkLocation {
    /// Rebuild a location from its stored string form.
    ///
    /// Absolute URLs already in canonical form become `Remote`. Everything
    /// else becomes `Local`, including Windows drive paths such as
    /// `C:\notes.md` that `Url` would accept with a one-letter scheme and
    /// names like `file:notes.md` that `Url` would rewrite. The string form
    /// of a location never changes across a save and load.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if url.scheme().len() > 1 && url.as_str() == raw => Self::Remote(url),
            _ => Self::Local(PathBuf::from(raw)),
        }
    }

    /// The stored string form.
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            Self::Remote(url) => Cow::Borrowed(url.as_str()),
            Self::Local(path) => path.to_string_lossy(),
        }
    }

    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl From<Url> for BookmarkLocation {
    fn from(url: Url) -> Self {
        Self::Remote(url)
    }
}

impl From<PathBuf> for BookmarkLocation {
    fn from(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

impl fmt::Display for BookmarkLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

/// A persisted bookmark.
///
/// Serializes as a three-element JSON array `[title, location, date_starred]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub title: String,
    pub location: BookmarkLocation,
    pub date_starred: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(
        title: impl Into<String>,
        location: impl Into<BookmarkLocation>,
        date_starred: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            date_starred,
        }
    }
}

impl Serialize for Bookmark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_tuple(3)?;
        record.serialize_element(&self.title)?;
        record.serialize_element(&self.location.as_str())?;
        record.serialize_element(
            &self
                .date_starred
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        )?;
        record.end()
    }
}

impl<'de> Deserialize<'de> for Bookmark {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (title, location, date_starred): (String, String, DateTime<Utc>) =
            Deserialize::deserialize(deserializer)?;
        Ok(Self {
            title,
            location: BookmarkLocation::parse(&location),
            date_starred,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn starred() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_remote() {
        let location = BookmarkLocation::parse("https://raw.githubusercontent.com/foo/bar/main/README.md");
        assert!(location.is_remote());
    }

    #[test]
    fn test_parse_local_paths() {
        for raw in [
            "/home/me/notes.md",
            "notes/todo.md",
            r"C:\notes\todo.md",
            "file:notes.md",
            "http:notes.md",
            "HTTPS://Example.com/a.md",
        ] {
            let location = BookmarkLocation::parse(raw);
            assert_eq!(location, BookmarkLocation::Local(PathBuf::from(raw)));
            assert_eq!(location.as_str(), raw);
        }
    }

    #[test]
    fn test_serializes_as_array() {
        let url = Url::parse("https://gitlab.com/foo/bar/-/raw/main/README.md").unwrap();
        let bookmark = Bookmark::new("foo/bar", url, starred());

        let json = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                "foo/bar",
                "https://gitlab.com/foo/bar/-/raw/main/README.md",
                "2023-01-01T00:00:00Z"
            ])
        );
    }

    #[test]
    fn test_deserializes_from_array() {
        let bookmark: Bookmark =
            serde_json::from_str(r#"["notes", "/tmp/notes.md", "2023-01-01T00:00:00Z"]"#).unwrap();
        assert_eq!(bookmark.title, "notes");
        assert_eq!(bookmark.location, BookmarkLocation::Local(PathBuf::from("/tmp/notes.md")));
        assert_eq!(bookmark.date_starred, starred());
    }

    #[test]
    fn test_keeps_fractional_seconds() {
        let date = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
        let bookmark = Bookmark::new("t", PathBuf::from("a.md"), date);
        let json = serde_json::to_string(&bookmark).unwrap();
        let back: Bookmark = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date_starred, date);
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(serde_json::from_str::<Bookmark>(r#"["only", "two"]"#).is_err());
        assert!(serde_json::from_str::<Bookmark>(r#"{"title": "x"}"#).is_err());
        assert!(serde_json::from_str::<Bookmark>(r#"["t", "/a.md", "yesterday"]"#).is_err());
    }
}
