//! Mortality reference tables, indexed by gender
//!
//! Tables are small (one row per calendar year) so lookup is a linear scan
//! in stored order. Duplicate years resolve to the first row.

use itertools::{Itertools, MinMaxResult};
use log::info;

use crate::models::{ByGender, Gender, ReferenceYearStats};

/// Per-gender mortality reference rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTableIndex {
    tables: ByGender<Vec<ReferenceYearStats>>,
}

impl ReferenceTableIndex {
    /// Build an index from the male and female tables
    #[must_use]
    pub fn build(male: Vec<ReferenceYearStats>, female: Vec<ReferenceYearStats>) -> Self {
        let index = Self {
            tables: ByGender::new(male, female),
        };
        for gender in Gender::ALL {
            match index.year_range(gender) {
                Some((first, last)) => info!(
                    "{} {gender} reference rows covering {first}-{last}",
                    index.table(gender).len()
                ),
                None => info!("No usable {gender} reference rows"),
            }
        }
        index
    }

    /// Find the first row for a gender whose year matches
    #[must_use]
    pub fn lookup(&self, gender: Gender, year: i32) -> Option<&ReferenceYearStats> {
        self.table(gender)
            .iter()
            .find(|row| row.year() == Some(year))
    }

    /// All rows for a gender, in stored order
    #[must_use]
    pub fn table(&self, gender: Gender) -> &[ReferenceYearStats] {
        self.tables.get(gender)
    }

    /// Earliest and latest year covered for a gender
    #[must_use]
    pub fn year_range(&self, gender: Gender) -> Option<(i32, i32)> {
        match self
            .table(gender)
            .iter()
            .filter_map(ReferenceYearStats::year)
            .minmax()
        {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(year) => Some((year, year)),
            MinMaxResult::MinMax(first, last) => Some((first, last)),
        }
    }
}
