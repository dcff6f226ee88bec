//! Data directory resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "FORGEMARK_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `FORGEMARK_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/forgemark`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var_os(DATA_DIR_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("forgemark"),
    };

    if root.exists() {
        if !root.is_dir() {
            return Err(PathError::NotADirectory(root));
        }
    } else {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}
