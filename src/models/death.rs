//! Enriched death records
//!
//! Produced once per qualifying individual by the extraction stage and never
//! mutated afterwards. Diffs are signed seconds beyond the reference value.

use serde::Serialize;

/// A qualifying individual compared against the reference year of their death
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedDeathRecord {
    /// Calendar year of death
    pub year_of_death: i32,
    /// Whole years lived, floor-divided
    pub age_at_death: i64,
    /// Seconds lived beyond the modal age at death
    pub modal_diff: f64,
    /// Seconds lived beyond the median age at death
    pub median_diff: f64,
    /// Seconds lived beyond life expectancy at birth, when the reference row has it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_expectancy_diff: Option<f64>,
}

impl EnrichedDeathRecord {
    /// Whether the individual lived past the modal age at death
    #[must_use]
    pub fn outlived_modal(&self) -> bool {
        self.modal_diff > 0.0
    }

    /// Whether the individual lived past the median age at death
    #[must_use]
    pub fn outlived_median(&self) -> bool {
        self.median_diff > 0.0
    }

    /// Whether the individual lived past life expectancy at birth
    ///
    /// `None` when the reference row carried no life expectancy.
    #[must_use]
    pub fn outlived_life_expectancy(&self) -> Option<bool> {
        self.life_expectancy_diff.map(|diff| diff > 0.0)
    }
}

/// Which diff of an [`EnrichedDeathRecord`] to aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    /// Deviation from the modal age at death
    Modal,
    /// Deviation from the median age at death
    Median,
    /// Deviation from life expectancy at birth
    LifeExpectancy,
}

impl DiffKind {
    /// Read this diff from a record
    #[must_use]
    pub fn value(self, record: &EnrichedDeathRecord) -> Option<f64> {
        match self {
            Self::Modal => Some(record.modal_diff),
            Self::Median => Some(record.median_diff),
            Self::LifeExpectancy => record.life_expectancy_diff,
        }
    }
}
