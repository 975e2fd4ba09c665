//! Ancestor longevity comparison
//!
//! The pipeline runs raw records through the sufficiency filter and the
//! extractor into per-gender buckets, averages each bucket, and phrases the
//! averages as report sentences.

pub mod extraction;
pub mod filters;
pub mod report;
pub mod statistics;

// Re-export commonly used items
pub use extraction::{
    DeathDetailExtractor, ExtractionOutcome, ExtractionReport, RejectionReason,
    extract_death_details,
};
pub use filters::{FilterCriteria, RecordFilter, is_sufficient};
pub use report::{GenderReport, ReportAssembler, compose_message};
pub use statistics::{
    AggregateStatsCalculator, BucketSummary, GenderAggregateStats, calculate_death_diff_stats,
};
