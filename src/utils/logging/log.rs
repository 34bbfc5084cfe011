//! Logging utilities
//!
//! This module provides standardized logging functions for generator stages.

use std::path::Path;
use std::time::Duration;

/// Log a stage start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file or directory being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log a stage completion with consistent format
///
/// # Arguments
/// * `operation` - Past-tense description of the operation
/// * `items` - Number of items processed
/// * `path` - Optional path the items were written to
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    items: usize,
    path: Option<&Path>,
    elapsed: Option<Duration>,
) {
    match (path, elapsed) {
        (Some(path), Some(duration)) => log::info!(
            "Successfully {} {} records to {} in {:?}",
            operation,
            items,
            path.display(),
            duration
        ),
        (Some(path), None) => log::info!(
            "Successfully {} {} records to {}",
            operation,
            items,
            path.display()
        ),
        (None, Some(duration)) => {
            log::info!("Successfully {operation} {items} records in {duration:?}");
        }
        (None, None) => log::info!("Successfully {operation} {items} records"),
    }
}
