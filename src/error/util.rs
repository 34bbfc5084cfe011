//! Utility functions for error handling
//!
//! Filesystem helpers that attach the failing path to the error.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, SpiroError};

/// Make sure `path` exists as a directory, creating it and its parents if needed
///
/// # Arguments
/// * `path` - The directory that must exist
/// * `purpose` - Why the directory is needed (for log context)
pub fn ensure_directory(path: &Path, purpose: &str) -> Result<()> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }

    if path.exists() {
        return Err(SpiroError::OutputDirectory {
            path: path.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("path exists but is not a directory (needed for: {purpose})"),
            ),
        });
    }

    log::debug!("Creating directory {} for {}", path.display(), purpose);
    fs::create_dir_all(path).map_err(|source| SpiroError::OutputDirectory {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensure the parent directory of `file` exists
pub fn ensure_parent_directory(file: &Path, purpose: &str) -> Result<()> {
    match file.parent() {
        Some(parent) => ensure_directory(parent, purpose),
        None => Ok(()),
    }
}
