use std::fs;
use std::path::Path;

use crate::error::{MarktreeError, Result};

/// List profile directories directly under a browser's data root.
///
/// A directory counts as a profile iff its name is exactly "Default" or
/// starts with "Profile" ("Profile 1", "Profile 2", ...). Everything else
/// ("Guest Profile", "System Profile", plain files) is skipped. The order
/// is whatever the filesystem yields; no sorting is applied.
pub fn list_profiles(root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(root).map_err(|source| MarktreeError::DirectoryUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut profiles = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name == "Default" || name.starts_with("Profile") {
                profiles.push(name.to_string());
            }
        }
    }

    log::debug!("{} profile(s) under {}", profiles.len(), root.display());
    Ok(profiles)
}
