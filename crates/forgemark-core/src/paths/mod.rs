//! Path utilities for forgemark data files.
//!
//! This module provides the canonical path resolution for persisted state:
//! - Application data root
//! - Per-user GitHub star bookmark files
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O
//! - OS-specific logic is kept private in `platform`

mod error;
mod platform;
mod stars;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
pub use stars::{github_stars_file_name, github_stars_path};
