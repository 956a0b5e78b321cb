use std::path::PathBuf;

use crate::error::{MarktreeError, Result};

/// Resolve the invoking user's home directory from the environment
pub fn home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    #[cfg(target_os = "windows")]
    if let Ok(profile) = std::env::var("USERPROFILE") {
        if !profile.is_empty() {
            return Ok(PathBuf::from(profile));
        }
    }

    Err(MarktreeError::NoHomeDir)
}

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("marktree");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/marktree");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("marktree");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
