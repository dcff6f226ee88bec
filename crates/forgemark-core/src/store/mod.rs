//! Bookmark store implementations.

mod json;

pub use json::JsonBookmarkStore;
