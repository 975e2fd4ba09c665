//! Individual record as supplied by the family-tree export
//!
//! Records arrive as loosely-shaped rows: any of the fields of interest may be
//! missing. Nothing is validated here; the record filter decides whether a
//! row carries enough to be processed.

use std::collections::HashMap;

/// Column holding the birth date
pub const BIRTH_DATE_FIELD: &str = "Birth date";
/// Column holding the death date
pub const DEATH_DATE_FIELD: &str = "Death date";
/// Column holding the gender
pub const GENDER_FIELD: &str = "Gender";

/// A raw individual from the ancestors dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndividualRecord {
    /// Birth date text, if the column had a value
    pub birth_date: Option<String>,
    /// Death date text, if the column had a value
    pub death_date: Option<String>,
    /// Gender text, if the column had a value
    pub gender: Option<String>,
}

impl IndividualRecord {
    /// Create a record where every field is present
    #[must_use]
    pub fn new(birth_date: &str, death_date: &str, gender: &str) -> Self {
        Self {
            birth_date: Some(birth_date.to_string()),
            death_date: Some(death_date.to_string()),
            gender: Some(gender.to_string()),
        }
    }

    /// Build a record from a header-keyed row
    ///
    /// Columns other than birth date, death date and gender are ignored.
    #[must_use]
    pub fn from_fields(fields: &HashMap<String, Option<String>>) -> Self {
        let take = |name: &str| fields.get(name).cloned().flatten();
        Self {
            birth_date: take(BIRTH_DATE_FIELD),
            death_date: take(DEATH_DATE_FIELD),
            gender: take(GENDER_FIELD),
        }
    }
}
