//! Domain models for the longevity comparison
//!
//! Raw individuals and reference rows come from the reader; enriched death
//! records are produced by the extraction stage.

pub mod death;
pub mod individual;
pub mod reference;
pub mod types;

pub use death::{DiffKind, EnrichedDeathRecord};
pub use individual::IndividualRecord;
pub use reference::ReferenceYearStats;
pub use types::{ByGender, Gender};
