//! Error handling for the longevity pipeline.
//!
//! Individual records never produce errors: anything wrong with a single
//! ancestor is reported as a [`RejectionReason`](crate::algorithm::longevity::RejectionReason)
//! instead. Errors here are reserved for the surrounding I/O and for
//! aggregation over an empty gender bucket.

use std::io;
use std::path::{Path, PathBuf};

use crate::models::Gender;

pub mod util;

/// Specialized error type for the longevity pipeline
#[derive(Debug, thiserror::Error)]
pub enum LongevityError {
    /// Error opening, reading or writing a file
    #[error("IO error for {}: {source}", path.display())]
    IoError {
        /// File the operation was performed on
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error decoding or encoding CSV data
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A column required by the reader is not present in the header row
    #[error("Required column '{column}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column
        column: String,
        /// File that was being read
        path: PathBuf,
    },

    /// A configuration value is unusable
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No qualifying records exist for a gender, so no average can be taken
    #[error("Insufficient data for {gender} ancestors")]
    InsufficientData {
        /// The gender whose bucket was empty
        gender: Gender,
    },
}

impl LongevityError {
    /// Wrap an IO error with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Whether this error only signals an empty gender bucket
    #[must_use]
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

/// Result type for longevity operations
pub type Result<T> = std::result::Result<T, LongevityError>;
