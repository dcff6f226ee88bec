//! Integration tests for the JSON bookmark store.
//!
//! Bookmarks must come back exactly as they were saved, whatever mix of
//! remote and local locations they carry.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use forgemark_core::{Bookmark, BookmarkLocation, BookmarkStore, JsonBookmarkStore, StoreError};
use tempfile::TempDir;
use url::Url;

fn mixed_bookmarks(count: usize) -> Vec<Bookmark> {
    let base: DateTime<Utc> = Utc.with_ymd_and_hms(2021, 3, 14, 15, 9, 26).unwrap();
    (0..count)
        .map(|i| {
            let offset = i64::try_from(i).unwrap();
            let location = match i % 3 {
                0 => BookmarkLocation::Remote(
                    Url::parse(&format!(
                        "https://raw.githubusercontent.com/owner{i}/repo{i}/main/README.md"
                    ))
                    .unwrap(),
                ),
                1 => BookmarkLocation::Remote(
                    Url::parse(&format!(
                        "https://codeberg.org/owner{i}/repo{i}/raw//branch/master/README.md"
                    ))
                    .unwrap(),
                ),
                _ => BookmarkLocation::Local(PathBuf::from(format!("/home/me/notes/{i}.md"))),
            };
            Bookmark {
                title: format!("owner{i}/repo{i}"),
                location,
                date_starred: base + Duration::hours(offset),
            }
        })
        .collect()
}

#[tokio::test]
async fn test_round_trip_preserves_every_field() {
    let dir = TempDir::new().unwrap();
    let store = JsonBookmarkStore::new(dir.path().join("octocat_github_stars.json"));
    let original = mixed_bookmarks(9);

    store.save(&original).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded.len(), original.len());
    for (before, after) in original.iter().zip(&loaded) {
        assert_eq!(before.title, after.title);
        assert_eq!(before.location.to_string(), after.location.to_string());
        assert_eq!(before.date_starred, after.date_starred);
    }
    assert_eq!(loaded, original);
}

#[tokio::test]
async fn test_codeberg_double_slash_survives() {
    let dir = TempDir::new().unwrap();
    let store = JsonBookmarkStore::new(dir.path().join("stars.json"));
    let original = mixed_bookmarks(2);

    store.save(&original).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert!(loaded[1].location.to_string().contains("/raw//branch/"));
}

#[tokio::test]
async fn test_url_like_local_names_stay_local() {
    let dir = TempDir::new().unwrap();
    let store = JsonBookmarkStore::new(dir.path().join("stars.json"));
    let date = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let original: Vec<Bookmark> = ["file:notes.md", "http:notes.md", "HTTPS://Example.com/a.md"]
        .into_iter()
        .map(|raw| Bookmark::new("t", PathBuf::from(raw), date))
        .collect();

    store.save(&original).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded, original);
    assert_eq!(loaded[0].location.to_string(), "file:notes.md");
    assert_eq!(loaded[1].location.to_string(), "http:notes.md");
}

#[tokio::test]
async fn test_empty_list_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = JsonBookmarkStore::new(dir.path().join("stars.json"));

    store.save(&[]).await.unwrap();

    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_nonexistent_path_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonBookmarkStore::new(dir.path().join("never").join("written.json"));

    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_hand_written_file_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stars.json");
    std::fs::write(
        &path,
        r#"[
    ["foo/bar", "https://raw.githubusercontent.com/foo/bar/main/README.md", "2023-01-01T00:00:00Z"],
    ["notes", "notes/todo.md", "2023-01-02T08:30:00+02:00"]
]"#,
    )
    .unwrap();

    let loaded = JsonBookmarkStore::new(&path).load().await.unwrap();

    assert_eq!(loaded.len(), 2);
    assert!(loaded[0].location.is_remote());
    assert_eq!(loaded[1].location.to_string(), "notes/todo.md");
    assert_eq!(
        loaded[1].date_starred,
        Utc.with_ymd_and_hms(2023, 1, 2, 6, 30, 0).unwrap()
    );
}

#[tokio::test]
async fn test_truncated_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stars.json");
    std::fs::write(&path, r#"[["foo/bar", "https://example.com/"#).unwrap();

    let err = JsonBookmarkStore::new(&path).load().await.unwrap_err();

    assert!(matches!(err, StoreError::Malformed { .. }));
}
