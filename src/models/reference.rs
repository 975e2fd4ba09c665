//! Mortality reference rows
//!
//! A reference row is one year of a national mortality table. Numeric columns
//! are kept as text until they are needed so that a row missing, say, its
//! median can still serve lookups that only need the modal age.

use std::collections::HashMap;

/// Symbolized column names of a reference table
pub const YEAR_COLUMN: &str = "year";
/// Modal age at death column
pub const MODAL_AGE_COLUMN: &str = "modal_age_at_death";
/// Median age at death column
pub const MEDIAN_AGE_COLUMN: &str = "median_age_at_death";
/// Life expectancy at birth column
pub const LIFE_EXPECTANCY_COLUMN: &str = "life_expectancy_at_birth";

/// One year of mortality statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceYearStats {
    /// Calendar year the row describes
    pub year: String,
    /// Modal age at death in years
    pub modal_age_at_death: Option<String>,
    /// Median age at death in years
    pub median_age_at_death: Option<String>,
    /// Life expectancy at birth in years
    pub life_expectancy_at_birth: Option<String>,
}

impl ReferenceYearStats {
    /// Create a fully populated row from numeric values
    #[must_use]
    pub fn new(year: i32, modal_age_at_death: f64, median_age_at_death: f64) -> Self {
        Self {
            year: year.to_string(),
            modal_age_at_death: Some(modal_age_at_death.to_string()),
            median_age_at_death: Some(median_age_at_death.to_string()),
            life_expectancy_at_birth: None,
        }
    }

    /// Attach a life expectancy at birth value
    #[must_use]
    pub fn with_life_expectancy(mut self, life_expectancy_at_birth: f64) -> Self {
        self.life_expectancy_at_birth = Some(life_expectancy_at_birth.to_string());
        self
    }

    /// Build a row from symbolized column names
    ///
    /// Returns `None` only if the row has no year.
    #[must_use]
    pub fn from_fields(fields: &HashMap<String, Option<String>>) -> Option<Self> {
        let take = |name: &str| fields.get(name).cloned().flatten();
        Some(Self {
            year: take(YEAR_COLUMN)?,
            modal_age_at_death: take(MODAL_AGE_COLUMN),
            median_age_at_death: take(MEDIAN_AGE_COLUMN),
            life_expectancy_at_birth: take(LIFE_EXPECTANCY_COLUMN),
        })
    }

    /// The year as an integer, if it is one
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }

    /// Modal age at death in years, if present and numeric
    #[must_use]
    pub fn modal_age(&self) -> Option<f64> {
        parse_years(self.modal_age_at_death.as_deref())
    }

    /// Median age at death in years, if present and numeric
    #[must_use]
    pub fn median_age(&self) -> Option<f64> {
        parse_years(self.median_age_at_death.as_deref())
    }

    /// Life expectancy at birth in years, if present and numeric
    #[must_use]
    pub fn life_expectancy(&self) -> Option<f64> {
        parse_years(self.life_expectancy_at_birth.as_deref())
    }
}

fn parse_years(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
