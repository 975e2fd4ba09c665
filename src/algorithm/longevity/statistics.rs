//! Longevity statistics and summaries
//!
//! Averages per-gender deviations from the reference ages and derives the
//! counts a report needs from an enriched bucket.

use itertools::{Itertools, MinMaxResult};
use log::{info, warn};
use serde::Serialize;

use crate::config::{AggregationMode, LongevityConfig};
use crate::error::{LongevityError, Result};
use crate::models::{ByGender, DiffKind, EnrichedDeathRecord, Gender};

/// Average deviation of one gender, in years rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenderAggregateStats {
    /// Average years lived beyond the modal age at death
    pub modal_diff: f64,
    /// Average years lived beyond the median age at death
    pub median_diff: f64,
    /// Average years lived beyond life expectancy at birth, over the records that have it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_expectancy_diff: Option<f64>,
}

/// Round half away from zero to a number of decimal places
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Mean of one diff over the records carrying it, in seconds rounded to two decimals
///
/// Yields NaN when no record carries the diff.
#[must_use]
pub fn average_diff(records: &[EnrichedDeathRecord], kind: DiffKind) -> f64 {
    let (sum, count) = records
        .iter()
        .filter_map(|r| kind.value(r))
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    round_to(sum / count as f64, 2)
}

/// Mean of one diff converted to years, rounded to two decimals
#[must_use]
pub fn average_diff_years(
    records: &[EnrichedDeathRecord],
    kind: DiffKind,
    seconds_per_year: i64,
) -> f64 {
    round_to(average_diff(records, kind) / seconds_per_year as f64, 2)
}

/// Computes per-gender average deviations
#[derive(Debug, Clone, Copy)]
pub struct AggregateStatsCalculator {
    seconds_per_year: i64,
    mode: AggregationMode,
}

impl Default for AggregateStatsCalculator {
    fn default() -> Self {
        Self::new(&LongevityConfig::default())
    }
}

impl AggregateStatsCalculator {
    /// Create a calculator using the configured year length and aggregation mode
    #[must_use]
    pub fn new(config: &LongevityConfig) -> Self {
        Self {
            seconds_per_year: config.seconds_per_year,
            mode: config.aggregation_mode,
        }
    }

    /// Average deviations for a single gender's bucket
    ///
    /// In strict mode an empty bucket is `InsufficientData`; in parity mode
    /// it produces NaN averages.
    pub fn calculate_gender(
        &self,
        gender: Gender,
        records: &[EnrichedDeathRecord],
    ) -> Result<GenderAggregateStats> {
        if records.is_empty() && self.mode == AggregationMode::Strict {
            return Err(LongevityError::InsufficientData { gender });
        }

        let life_expectancy_diff = records
            .iter()
            .any(|r| r.life_expectancy_diff.is_some())
            .then(|| average_diff_years(records, DiffKind::LifeExpectancy, self.seconds_per_year));

        Ok(GenderAggregateStats {
            modal_diff: average_diff_years(records, DiffKind::Modal, self.seconds_per_year),
            median_diff: average_diff_years(records, DiffKind::Median, self.seconds_per_year),
            life_expectancy_diff,
        })
    }

    /// Average deviations for both genders, failing on the first empty bucket
    pub fn calculate(
        &self,
        buckets: &ByGender<Vec<EnrichedDeathRecord>>,
    ) -> Result<ByGender<GenderAggregateStats>> {
        Ok(ByGender::new(
            self.calculate_gender(Gender::Male, &buckets.male)?,
            self.calculate_gender(Gender::Female, &buckets.female)?,
        ))
    }

    /// Average deviations for both genders, keeping each gender's outcome separate
    #[must_use]
    pub fn calculate_each(
        &self,
        buckets: &ByGender<Vec<EnrichedDeathRecord>>,
    ) -> ByGender<Result<GenderAggregateStats>> {
        let results = buckets.map(|gender, records| self.calculate_gender(gender, records));
        for (gender, result) in results.iter() {
            match result {
                Ok(stats) => info!(
                    "Aggregated {} {gender} ancestors: modal {:+} years, median {:+} years",
                    buckets.get(gender).len(),
                    stats.modal_diff,
                    stats.median_diff
                ),
                Err(e) => warn!("{e}"),
            }
        }
        results
    }
}

/// Average deviations for both genders with the default configuration
pub fn calculate_death_diff_stats(
    buckets: &ByGender<Vec<EnrichedDeathRecord>>,
) -> Result<ByGender<GenderAggregateStats>> {
    AggregateStatsCalculator::default().calculate(buckets)
}

/// Derived counts over one gender's bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BucketSummary {
    /// Number of ancestors in the bucket
    pub ancestor_count: usize,
    /// Earliest year of death
    pub earliest_death: Option<i32>,
    /// Latest year of death
    pub latest_death: Option<i32>,
    /// Ancestors who lived past the modal age at death
    pub count_outlived_modal: usize,
    /// Ancestors who lived past the median age at death
    pub count_outlived_median: usize,
    /// Ancestors who lived past life expectancy at birth
    pub count_outlived_life_expectancy: usize,
    /// Ancestors whose reference row had a life expectancy
    pub count_with_life_expectancy: usize,
}

impl BucketSummary {
    /// Summarize a bucket of enriched records
    #[must_use]
    pub fn from_records(records: &[EnrichedDeathRecord]) -> Self {
        let (earliest_death, latest_death) =
            match records.iter().map(|r| r.year_of_death).minmax() {
                MinMaxResult::NoElements => (None, None),
                MinMaxResult::OneElement(year) => (Some(year), Some(year)),
                MinMaxResult::MinMax(first, last) => (Some(first), Some(last)),
            };

        Self {
            ancestor_count: records.len(),
            earliest_death,
            latest_death,
            count_outlived_modal: records.iter().filter(|r| r.outlived_modal()).count(),
            count_outlived_median: records.iter().filter(|r| r.outlived_median()).count(),
            count_outlived_life_expectancy: records
                .iter()
                .filter(|r| r.outlived_life_expectancy() == Some(true))
                .count(),
            count_with_life_expectancy: records
                .iter()
                .filter(|r| r.life_expectancy_diff.is_some())
                .count(),
        }
    }
}
