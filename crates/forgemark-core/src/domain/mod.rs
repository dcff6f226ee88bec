//! Domain types shared by every forgemark component.

mod bookmark;
mod forge;
mod repo;

pub use bookmark::{Bookmark, BookmarkLocation};
pub use forge::{DEFAULT_FILE, Forge, ForgeTemplate};
pub use repo::RepoIdentifier;
