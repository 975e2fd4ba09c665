use std::fs;
use std::path::{Path, PathBuf};

use ancestor_longevity::{ReferenceTableIndex, ReferenceYearStats};

/// Reference tables shared by the extraction tests
#[must_use]
pub fn sample_reference_index() -> ReferenceTableIndex {
    ReferenceTableIndex::build(
        vec![
            ReferenceYearStats::new(1970, 72.0, 73.0).with_life_expectancy(70.0),
            ReferenceYearStats::new(1971, 73.0, 74.0).with_life_expectancy(71.0),
        ],
        vec![
            ReferenceYearStats::new(1970, 79.0, 80.0).with_life_expectancy(76.0),
            ReferenceYearStats::new(1971, 80.0, 81.0).with_life_expectancy(77.0),
        ],
    )
}

/// Write a file into a scratch directory and return its path
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write fixture");
    path
}

pub const MALE_DEATH_STATS: &str = "\
year,modal_age_at_death,median_age_at_death,life_expectancy_at_birth
1970,72.0,73.0,70.0
1971,73.0,74.0,71.0
";

pub const FEMALE_DEATH_STATS: &str = "\
Year,Modal age at death,Median age at death,Life expectancy at birth
1970,79.0,80.0,76.0
1971,80.0,81.0,77.0
";

pub const ANCESTORS: &str = "\
Name,Birth date,Death date,Gender
Albert,1900-01-01,1970-06-01,Male
Bertram,1901-01-01,1971,Male
Clara,1871-01-01,1971-01-01,Female
Dora,1880-01-01,1 January 1970,Female
Edith,1870-01-01,about 1970,Female
Frank,1920-01-01,,Male
Grace,,1995-01-01,Female
Harold,1965-03-01,1971-01-01,Male
Ivy,1900-01-01,1971-01-01,
Jack,1500-01-01,1571-01-01,Male
";
