//! Common domain type definitions
//!
//! This module contains the gender classification used to pick a mortality
//! table and the per-gender container that every pipeline stage returns.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Gender of an individual
///
/// Only the two genders covered by the mortality reference tables exist here;
/// any other value in the input is treated as insufficient data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
}

impl Gender {
    /// Both genders, in report order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Lower-case label used in reports and exports
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Normalize a raw gender field, case-insensitively
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            other => Err(format!("unrecognized gender '{other}'")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per gender
///
/// Buckets of enriched records, aggregate stats and summaries are all keyed by
/// gender; this keeps both slots present even when one of them is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ByGender<T> {
    /// Value for male individuals
    pub male: T,
    /// Value for female individuals
    pub female: T,
}

impl<T> ByGender<T> {
    /// Create from both values
    pub fn new(male: T, female: T) -> Self {
        Self { male, female }
    }

    /// Borrow the value for a gender
    pub fn get(&self, gender: Gender) -> &T {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Mutably borrow the value for a gender
    pub fn get_mut(&mut self, gender: Gender) -> &mut T {
        match gender {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
        }
    }

    /// Iterate over `(gender, value)` pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (Gender, &T)> {
        Gender::ALL.into_iter().map(move |g| (g, self.get(g)))
    }

    /// Apply a function to both values
    pub fn map<U>(&self, mut f: impl FnMut(Gender, &T) -> U) -> ByGender<U> {
        ByGender {
            male: f(Gender::Male, &self.male),
            female: f(Gender::Female, &self.female),
        }
    }
}
