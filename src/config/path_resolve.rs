// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, ConfigError, Error, Result};
use directories::BaseDirs;
use log::debug;
use std::path::{Path, PathBuf};

/// Resolves the root path string to an absolute, canonicalized directory path.
///
/// # Errors
/// Returns `Error::Io` if the path cannot be canonicalized and
/// `ConfigError::NotADirectory` if it resolves to something other than a directory.
pub fn resolve_root_path(root: &Path) -> Result<PathBuf> {
    let resolved = root
        .canonicalize()
        .map_err(|e| io_error_with_path(e, root))?;
    if !resolved.is_dir() {
        return Err(ConfigError::NotADirectory(resolved.display().to_string()).into());
    }
    debug!("Resolved root path: {}", resolved.display());
    Ok(resolved)
}

/// Returns `true` if `resolved` is the filesystem root or the user's home directory.
///
/// `resolved` is expected to be canonical already.
pub fn is_dangerous_root(resolved: &Path) -> bool {
    if resolved.parent().is_none() {
        return true;
    }
    home_dir().is_some_and(|home| home == resolved)
}

fn home_dir() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    let home = dirs.home_dir();
    Some(home.canonicalize().unwrap_or_else(|_| home.to_path_buf()))
}

/// Rejects a dangerous root unless `force` is set.
pub(super) fn check_root_allowed(resolved: &Path, force: bool) -> Result<()> {
    if !force && is_dangerous_root(resolved) {
        return Err(Error::Config(ConfigError::DangerousRoot(
            resolved.display().to_string(),
        )));
    }
    Ok(())
}
