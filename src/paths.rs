//! XDG-style path utilities for configuration and cache directories.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "mixtl";

/// Returns the configuration directory for mixtl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/mixtl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/mixtl` otherwise
///
/// # Errors
///
/// Returns an error if neither is available.
pub fn config_dir() -> Result<PathBuf> {
    base_dir("XDG_CONFIG_HOME", ".config")
}

/// Returns the cache directory for mixtl.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/mixtl` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/mixtl` otherwise
///
/// # Errors
///
/// Returns an error if neither is available.
pub fn cache_dir() -> Result<PathBuf> {
    base_dir("XDG_CACHE_HOME", ".cache")
}

fn base_dir(xdg_var: &str, home_subdir: &str) -> Result<PathBuf> {
    // an empty XDG variable counts as unset
    if let Ok(xdg) = std::env::var(xdg_var)
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }
    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(home_subdir).join(APP_DIR))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_default() {
        // Clear XDG_CONFIG_HOME to test default behavior
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/mixtl"));

        // Restore
        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let dir = config_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/custom/config/mixtl"));

        // Restore
        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }

    #[test]
    #[serial]
    fn test_cache_dir_default() {
        // Clear XDG_CACHE_HOME to test default behavior
        let original = std::env::var("XDG_CACHE_HOME").ok();
        unsafe { std::env::remove_var("XDG_CACHE_HOME") };

        let dir = cache_dir().unwrap();
        assert!(dir.ends_with(".cache/mixtl"));

        // Restore
        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CACHE_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_cache_dir_xdg_override() {
        let original = std::env::var("XDG_CACHE_HOME").ok();
        unsafe { std::env::set_var("XDG_CACHE_HOME", "/custom/cache") };

        let dir = cache_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/custom/cache/mixtl"));

        // Restore
        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CACHE_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CACHE_HOME") };
        }
    }
}
