//! Configuration for the longevity pipeline.

use std::fmt;

use crate::error::{LongevityError, Result};
use crate::schema::date_utils::DateFormatConfig;

/// Seconds in a 365-day year, used for every age and diff conversion
pub const SECONDS_IN_NON_LEAP_YEAR: i64 = 31_536_000;

/// Deaths younger than this many years are excluded, as the ONS does
pub const DEFAULT_CHILDHOOD_EXCLUSION_YEARS: i64 = 10;

/// How aggregation treats a gender with no qualifying records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationMode {
    /// Report the empty bucket as insufficient data
    #[default]
    Strict,
    /// Divide by zero anyway, yielding NaN averages
    Parity,
}

/// Configuration for the longevity pipeline
#[derive(Debug, Clone)]
pub struct LongevityConfig {
    /// Seconds per year for age and diff conversions (non-leap by default)
    pub seconds_per_year: i64,
    /// Minimum age at death, in years, for a record to be compared
    pub childhood_exclusion_years: i64,
    /// Behaviour when a gender bucket is empty
    pub aggregation_mode: AggregationMode,
    /// Date format configuration for birth and death dates
    pub date_format_config: DateFormatConfig,
}

impl Default for LongevityConfig {
    fn default() -> Self {
        Self {
            seconds_per_year: SECONDS_IN_NON_LEAP_YEAR,
            childhood_exclusion_years: DEFAULT_CHILDHOOD_EXCLUSION_YEARS,
            aggregation_mode: AggregationMode::Strict,
            date_format_config: DateFormatConfig::default(),
        }
    }
}

impl LongevityConfig {
    /// Override the seconds-per-year divisor
    #[must_use]
    pub fn with_seconds_per_year(mut self, seconds_per_year: i64) -> Self {
        self.seconds_per_year = seconds_per_year;
        self
    }

    /// Override the childhood exclusion threshold
    #[must_use]
    pub fn with_childhood_exclusion_years(mut self, years: i64) -> Self {
        self.childhood_exclusion_years = years;
        self
    }

    /// Override the aggregation mode
    #[must_use]
    pub fn with_aggregation_mode(mut self, mode: AggregationMode) -> Self {
        self.aggregation_mode = mode;
        self
    }

    /// Override the date format configuration
    #[must_use]
    pub fn with_date_format_config(mut self, config: DateFormatConfig) -> Self {
        self.date_format_config = config;
        self
    }

    /// Minimum age at death in seconds
    #[must_use]
    pub fn exclusion_threshold_seconds(&self) -> i64 {
        self.childhood_exclusion_years * self.seconds_per_year
    }

    /// Check that the numeric settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.seconds_per_year <= 0 {
            return Err(LongevityError::ConfigError(format!(
                "seconds per year must be positive, got {}",
                self.seconds_per_year
            )));
        }
        if self.childhood_exclusion_years < 0 {
            return Err(LongevityError::ConfigError(format!(
                "childhood exclusion years must not be negative, got {}",
                self.childhood_exclusion_years
            )));
        }
        Ok(())
    }
}

impl fmt::Display for LongevityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Longevity Configuration:")?;
        writeln!(f, "  Seconds Per Year: {}", self.seconds_per_year)?;
        writeln!(
            f,
            "  Childhood Exclusion: under {} years",
            self.childhood_exclusion_years
        )?;
        writeln!(f, "  Aggregation Mode: {:?}", self.aggregation_mode)?;
        writeln!(
            f,
            "  Date Formats: {}",
            self.date_format_config.date_formats.join(", ")
        )
    }
}
