//! Report sentences for the longevity comparison
//!
//! Wording depends on the sign of each average: negative deviations read as
//! "fewer years", everything else (zero included) as "more years".

use serde::Serialize;

use crate::algorithm::longevity::statistics::{BucketSummary, GenderAggregateStats};
use crate::error::Result;
use crate::models::{ByGender, EnrichedDeathRecord, Gender};

/// Describe a deviation in years
#[must_use]
pub fn compose_message(years: f64) -> String {
    if years < 0.0 {
        format!("{} fewer years", years.abs())
    } else {
        format!("{} more years", years.abs())
    }
}

/// Everything reported for one gender
#[derive(Debug, Clone, Serialize)]
pub struct GenderReport {
    /// Gender the report covers
    pub gender: Gender,
    /// Average deviations, absent when the bucket was empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<GenderAggregateStats>,
    /// Counts derived from the bucket
    pub summary: BucketSummary,
    /// Human-readable sentences
    pub lines: Vec<String>,
}

/// Functions for composing report sentences
pub struct ReportAssembler;

impl ReportAssembler {
    /// Sentences describing one gender's averages and the data behind them
    #[must_use]
    pub fn summary_lines(
        gender: Gender,
        stats: &GenderAggregateStats,
        summary: &BucketSummary,
    ) -> Vec<String> {
        let count = summary.ancestor_count;
        let mut lines = vec![
            format!(
                "{gender} ancestors in the provided dataset lived {} than the UK's {gender} modal age of death in the year they died ({}/{count} outlived the mode)",
                compose_message(stats.modal_diff),
                summary.count_outlived_modal,
            ),
            format!(
                "{gender} ancestors in the provided dataset lived {} than the UK's {gender} median age of death in the year they died ({}/{count} outlived the median)",
                compose_message(stats.median_diff),
                summary.count_outlived_median,
            ),
        ];

        if let Some(life_expectancy_diff) = stats.life_expectancy_diff {
            lines.push(format!(
                "{gender} ancestors in the provided dataset lived {} than the UK's {gender} life expectancy at birth in the year they died ({}/{} outlived it)",
                compose_message(life_expectancy_diff),
                summary.count_outlived_life_expectancy,
                summary.count_with_life_expectancy,
            ));
        }

        if let (Some(earliest), Some(latest)) = (summary.earliest_death, summary.latest_death) {
            lines.push(format!(
                "Calculated from {count} {gender} ancestors who died between {earliest} and {latest}"
            ));
        }

        lines
    }

    /// Sentence printed in place of a summary when a gender has no data
    #[must_use]
    pub fn insufficient_data_line(gender: Gender) -> String {
        format!("Insufficient data to compare {gender} ancestors")
    }

    /// Assemble the report for both genders from buckets and their aggregates
    #[must_use]
    pub fn assemble(
        buckets: &ByGender<Vec<EnrichedDeathRecord>>,
        aggregates: &ByGender<Result<GenderAggregateStats>>,
    ) -> Vec<GenderReport> {
        Gender::ALL
            .into_iter()
            .map(|gender| {
                let summary = BucketSummary::from_records(buckets.get(gender));
                let stats = aggregates.get(gender).as_ref().ok().copied();
                let lines = match &stats {
                    Some(stats) => Self::summary_lines(gender, stats, &summary),
                    None => vec![Self::insufficient_data_line(gender)],
                };
                GenderReport {
                    gender,
                    stats,
                    summary,
                    lines,
                }
            })
            .collect()
    }
}
