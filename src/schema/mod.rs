//! Input normalization helpers
//!
//! Dates and CSV headers arrive in whatever form the exporting tool chose;
//! this module turns them into the shapes the pipeline expects.

pub mod date_utils;
pub mod field_mapping;

pub use date_utils::{DateFormatConfig, DateParser, parse_date_string};
pub use field_mapping::symbolize_header;
