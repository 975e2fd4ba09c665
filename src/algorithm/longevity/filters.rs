//! Record sufficiency filter
//!
//! A pre-filter that only checks presence: a record needs a birth date, a
//! death date and a non-empty gender before any parsing is attempted.

use crate::models::IndividualRecord;

/// Defines a criterion for filtering records
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to a raw individual record
#[derive(Debug, Clone)]
pub enum RecordFilter {
    /// Birth date, death date and gender are all present
    Sufficient,
    /// The birth date field is present
    HasBirthDate,
    /// The death date field is present
    HasDeathDate,
    /// The gender field is present and non-empty
    HasGender,
    /// Combined filter that requires all criteria to be met
    All(Vec<RecordFilter>),
}

impl FilterCriteria<IndividualRecord> for RecordFilter {
    fn meets_criteria(&self, record: &IndividualRecord) -> bool {
        match self {
            Self::Sufficient => is_sufficient(record),
            Self::HasBirthDate => record.birth_date.is_some(),
            Self::HasDeathDate => record.death_date.is_some(),
            Self::HasGender => record.gender.as_deref().is_some_and(|g| !g.is_empty()),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(record)),
        }
    }
}

/// Whether a record carries enough information to be processed
///
/// Date values are not checked for parseability here; an empty date string
/// still counts as present and is left for the date parser to reject.
#[must_use]
pub fn is_sufficient(record: &IndividualRecord) -> bool {
    RecordFilter::All(vec![
        RecordFilter::HasBirthDate,
        RecordFilter::HasDeathDate,
        RecordFilter::HasGender,
    ])
    .meets_criteria(record)
}
