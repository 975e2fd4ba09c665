//! A Rust library for comparing how long ancestors lived against national
//! mortality statistics for their gender and year of death.
//!
//! Raw ancestor records and per-gender reference tables go in; per-gender
//! buckets of enriched death records, average deviations in years, and
//! report sentences come out.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reader;
pub mod reference;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{AggregationMode, LongevityConfig, SECONDS_IN_NON_LEAP_YEAR};
pub use error::{LongevityError, Result};
pub use models::{ByGender, EnrichedDeathRecord, Gender, IndividualRecord, ReferenceYearStats};
pub use reference::ReferenceTableIndex;

// Pipeline stages
pub use algorithm::longevity::{
    AggregateStatsCalculator, BucketSummary, DeathDetailExtractor, ExtractionOutcome,
    GenderAggregateStats, RejectionReason, ReportAssembler, calculate_death_diff_stats,
    compose_message, extract_death_details, is_sufficient,
};
pub use schema::date_utils::DateParser;

// Reading and exporting
pub use reader::{export_death_details, load_reference_index, read_individuals};
