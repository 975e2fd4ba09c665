//! Logging utilities for file operations
//!
//! This module provides consistent log lines for reading and writing files.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
