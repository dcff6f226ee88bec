//! GitHub star bookmark file location.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// File name holding a user's imported GitHub stars.
pub fn github_stars_file_name(username: &str) -> Result<String, PathError> {
    let trimmed = username.trim();
    if trimmed.is_empty()
        || trimmed.starts_with('.')
        || trimmed.contains(['/', '\\'])
    {
        return Err(PathError::InvalidUsername(username.to_string()));
    }
    Ok(format!("{trimmed}_github_stars.json"))
}

/// Path of a user's GitHub star bookmark file inside the data root.
pub fn github_stars_path(username: &str) -> Result<PathBuf, PathError> {
    let file_name = github_stars_file_name(username)?;
    Ok(data_root()?.join(file_name))
}
