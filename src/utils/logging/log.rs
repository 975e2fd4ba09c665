//! Logging helpers
//!
//! Standardized log lines for reading and writing the pipeline's files.

use std::path::Path;
use std::time::Duration;

/// Log the start of a file operation
///
/// # Arguments
/// * `operation` - Description of the operation, e.g. "Reading ancestors from"
/// * `path` - File being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log the completion of a file operation
///
/// # Arguments
/// * `verb` - Past tense of the operation ("read", "wrote")
/// * `path` - File that was operated on
/// * `rows` - Number of rows handled
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(verb: &str, path: &Path, rows: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {verb} {rows} rows ({}) in {duration:?}",
            path.display()
        ),
        None => log::info!("Successfully {verb} {rows} rows ({})", path.display()),
    }
}

/// Log a warning, optionally naming the file it concerns
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}
