//! Utility functions for error handling
//!
//! File access helpers that attach the offending path to IO failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{LongevityError, Result};

/// Open a file for reading, attaching the path to any error
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (logged on failure)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        log::warn!("Cannot open {} for {purpose}", path.display());
        return Err(LongevityError::io(
            path,
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        log::warn!("Failed to open {} for {purpose}: {e}", path.display());
        LongevityError::io(path, e)
    })
}

/// Create (or truncate) a file for writing, attaching the path to any error
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| {
        log::warn!("Failed to create {} for {purpose}: {e}", path.display());
        LongevityError::io(path, e)
    })
}
