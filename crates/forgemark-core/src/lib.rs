#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::{Bookmark, BookmarkLocation, DEFAULT_FILE, Forge, ForgeTemplate, RepoIdentifier};
pub use paths::{PathError, data_root, github_stars_path};
pub use ports::{BookmarkStore, ForgeClientPort, ForgePortError, ForgePortResult, StoreError};
pub use services::{StarImportError, StarImportService};
pub use store::JsonBookmarkStore;
