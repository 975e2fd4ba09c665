//! Death detail extraction
//!
//! Turns raw ancestors into enriched death records. Each record is classified
//! on its own: it is either accepted into its gender's bucket or rejected with
//! a reason. Rejections are never errors.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use log::{debug, info};

use crate::algorithm::longevity::filters::is_sufficient;
use crate::config::LongevityConfig;
use crate::models::{ByGender, EnrichedDeathRecord, Gender, IndividualRecord};
use crate::reference::ReferenceTableIndex;
use crate::schema::date_utils::DateParser;

/// Why a record did not make it into the comparison
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Birth date, death date or gender is missing
    InsufficientData,
    /// Gender is present but neither male nor female
    UnrecognizedGender(String),
    /// Birth date could not be read
    UnparseableBirthDate(String),
    /// Death date could not be read
    UnparseableDeathDate(String),
    /// The reference table has no row for the year of death
    NoReferenceYear {
        /// Table that was searched
        gender: Gender,
        /// Year of death
        year: i32,
    },
    /// The reference row lacks a value the comparison needs
    IncompleteReference {
        /// Table the row came from
        gender: Gender,
        /// Year of the row
        year: i32,
        /// Missing column
        field: &'static str,
    },
    /// Died before the childhood exclusion age
    ChildhoodDeath {
        /// Age at death in seconds
        age_seconds: i64,
    },
}

impl RejectionReason {
    /// Short stable label for grouping rejections
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InsufficientData => "insufficient_data",
            Self::UnrecognizedGender(_) => "unrecognized_gender",
            Self::UnparseableBirthDate(_) => "unparseable_birth_date",
            Self::UnparseableDeathDate(_) => "unparseable_death_date",
            Self::NoReferenceYear { .. } => "no_reference_year",
            Self::IncompleteReference { .. } => "incomplete_reference",
            Self::ChildhoodDeath { .. } => "childhood_death",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData => write!(f, "missing birth date, death date or gender"),
            Self::UnrecognizedGender(g) => write!(f, "unrecognized gender '{g}'"),
            Self::UnparseableBirthDate(d) => write!(f, "unparseable birth date '{d}'"),
            Self::UnparseableDeathDate(d) => write!(f, "unparseable death date '{d}'"),
            Self::NoReferenceYear { gender, year } => {
                write!(f, "no {gender} reference statistics for {year}")
            }
            Self::IncompleteReference {
                gender,
                year,
                field,
            } => write!(f, "{gender} reference row for {year} has no usable {field}"),
            Self::ChildhoodDeath { age_seconds } => {
                write!(f, "childhood death at {age_seconds} seconds of age")
            }
        }
    }
}

/// Classification of a single raw record
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// The record qualifies and was compared against its reference year
    Accepted {
        /// Bucket the record belongs to
        gender: Gender,
        /// The comparison result
        record: EnrichedDeathRecord,
    },
    /// The record was skipped
    Rejected(RejectionReason),
}

/// Buckets plus the reasons every other record was skipped
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Accepted records per gender, in input order
    pub buckets: ByGender<Vec<EnrichedDeathRecord>>,
    /// Input index and reason of each rejected record
    pub rejections: Vec<(usize, RejectionReason)>,
}

impl ExtractionReport {
    /// Number of accepted records across both genders
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.buckets.male.len() + self.buckets.female.len()
    }

    /// Number of rejections per reason kind
    #[must_use]
    pub fn rejection_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for (_, reason) in &self.rejections {
            *counts.entry(reason.kind()).or_insert(0) += 1;
        }
        counts
    }
}

/// Seconds since the Unix epoch of midnight UTC on a date
#[must_use]
pub fn epoch_seconds(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Compares individuals against the reference year of their death
#[derive(Debug, Clone)]
pub struct DeathDetailExtractor<'a> {
    index: &'a ReferenceTableIndex,
    parser: DateParser,
    seconds_per_year: i64,
    exclusion_threshold_seconds: i64,
}

impl<'a> DeathDetailExtractor<'a> {
    /// Create an extractor over a reference index
    #[must_use]
    pub fn new(index: &'a ReferenceTableIndex, config: &LongevityConfig) -> Self {
        Self {
            index,
            parser: DateParser::new(config.date_format_config.clone()),
            seconds_per_year: config.seconds_per_year,
            exclusion_threshold_seconds: config.exclusion_threshold_seconds(),
        }
    }

    /// Classify one record
    #[must_use]
    pub fn classify(&self, record: &IndividualRecord) -> ExtractionOutcome {
        match self.enrich(record) {
            Ok((gender, record)) => ExtractionOutcome::Accepted { gender, record },
            Err(reason) => ExtractionOutcome::Rejected(reason),
        }
    }

    /// Accepted records per gender, in input order
    #[must_use]
    pub fn extract(&self, records: &[IndividualRecord]) -> ByGender<Vec<EnrichedDeathRecord>> {
        self.extract_with_diagnostics(records).buckets
    }

    /// Accepted records per gender, plus every rejection and its reason
    #[must_use]
    pub fn extract_with_diagnostics(&self, records: &[IndividualRecord]) -> ExtractionReport {
        let mut report = ExtractionReport::default();

        for (idx, record) in records.iter().enumerate() {
            match self.classify(record) {
                ExtractionOutcome::Accepted { gender, record } => {
                    report.buckets.get_mut(gender).push(record);
                }
                ExtractionOutcome::Rejected(reason) => {
                    debug!("Skipping ancestor {idx}: {reason}");
                    report.rejections.push((idx, reason));
                }
            }
        }

        info!(
            "Extracted {} male and {} female ancestors from {} records ({} skipped)",
            report.buckets.male.len(),
            report.buckets.female.len(),
            records.len(),
            report.rejections.len()
        );
        report
    }

    fn enrich(
        &self,
        record: &IndividualRecord,
    ) -> Result<(Gender, EnrichedDeathRecord), RejectionReason> {
        if !is_sufficient(record) {
            return Err(RejectionReason::InsufficientData);
        }
        let (Some(birth_text), Some(death_text), Some(gender_text)) = (
            record.birth_date.as_deref(),
            record.death_date.as_deref(),
            record.gender.as_deref(),
        ) else {
            return Err(RejectionReason::InsufficientData);
        };

        let gender = Gender::parse(gender_text)
            .ok_or_else(|| RejectionReason::UnrecognizedGender(gender_text.to_string()))?;
        let birth_date = self
            .parser
            .parse(birth_text)
            .ok_or_else(|| RejectionReason::UnparseableBirthDate(birth_text.to_string()))?;
        let death_date = self
            .parser
            .parse(death_text)
            .ok_or_else(|| RejectionReason::UnparseableDeathDate(death_text.to_string()))?;

        // No extrapolation: a year outside the table is simply skipped
        let year = death_date.year();
        let stats = self
            .index
            .lookup(gender, year)
            .ok_or(RejectionReason::NoReferenceYear { gender, year })?;

        let age_seconds = epoch_seconds(death_date) - epoch_seconds(birth_date);
        if age_seconds < self.exclusion_threshold_seconds {
            return Err(RejectionReason::ChildhoodDeath { age_seconds });
        }

        let incomplete = |field| RejectionReason::IncompleteReference {
            gender,
            year,
            field,
        };
        let modal_age = stats
            .modal_age()
            .ok_or_else(|| incomplete("modal_age_at_death"))?;
        let median_age = stats
            .median_age()
            .ok_or_else(|| incomplete("median_age_at_death"))?;

        let seconds_per_year = self.seconds_per_year as f64;
        let diff = |reference_years: f64| age_seconds as f64 - reference_years * seconds_per_year;

        Ok((
            gender,
            EnrichedDeathRecord {
                year_of_death: year,
                age_at_death: age_seconds.div_euclid(self.seconds_per_year),
                modal_diff: diff(modal_age),
                median_diff: diff(median_age),
                life_expectancy_diff: stats.life_expectancy().map(diff),
            },
        ))
    }
}

/// Extract enriched records with the default configuration
#[must_use]
pub fn extract_death_details(
    records: &[IndividualRecord],
    index: &ReferenceTableIndex,
) -> ByGender<Vec<EnrichedDeathRecord>> {
    DeathDetailExtractor::new(index, &LongevityConfig::default()).extract(records)
}
