//! Tests for reading and exporting CSV files

use std::fs;

use ancestor_longevity::reader::{
    export_death_details, load_reference_index, read_individuals, read_reference_table,
};
use ancestor_longevity::{ByGender, EnrichedDeathRecord, Gender, LongevityError, ReferenceYearStats};

use crate::utils::{ANCESTORS, write_fixture};

#[test]
fn test_parses_male_and_female_death_stats() {
    let dir = tempfile::tempdir().unwrap();
    let male = write_fixture(
        dir.path(),
        "male_death_stats.csv",
        "year,modal_age_at_death,median_age_at_death,life_expectancy_at_birth\n2000,80,82,75\n2001,81,83,76\n",
    );
    let female = write_fixture(
        dir.path(),
        "female_death_stats.csv",
        "year,modal_age_at_death,median_age_at_death,life_expectancy_at_birth\n2000,85,87,80\n2001,86,88,81\n",
    );

    let male_rows = read_reference_table(&male).unwrap();
    assert_eq!(
        male_rows[0],
        ReferenceYearStats {
            year: "2000".to_string(),
            modal_age_at_death: Some("80".to_string()),
            median_age_at_death: Some("82".to_string()),
            life_expectancy_at_birth: Some("75".to_string()),
        }
    );

    let index = load_reference_index(&male, &female).unwrap();
    assert_eq!(index.table(Gender::Male).len(), 2);
    assert_eq!(index.table(Gender::Female).len(), 2);
    assert_eq!(
        index.lookup(Gender::Female, 2001).and_then(ReferenceYearStats::median_age),
        Some(88.0)
    );
    assert_eq!(index.year_range(Gender::Female), Some((2000, 2001)));
}

#[test]
fn test_missing_reference_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_reference_table(&dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, LongevityError::IoError { .. }));
}

#[test]
fn test_reads_ancestors_with_absent_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "direct-ancestors.csv", ANCESTORS);

    let ancestors = read_individuals(&path).unwrap();
    assert_eq!(ancestors.len(), 10);
    assert_eq!(ancestors[1].death_date.as_deref(), Some("1971"));
    assert_eq!(ancestors[5].death_date, None);
    assert_eq!(ancestors[6].birth_date, None);
    assert_eq!(ancestors[8].gender, None);
}

#[test]
fn test_export_appends_csv_extension() {
    let dir = tempfile::tempdir().unwrap();
    let buckets = ByGender::new(
        Vec::new(),
        vec![EnrichedDeathRecord {
            year_of_death: 1971,
            age_at_death: 100,
            modal_diff: 632_793_600.0,
            median_diff: 601_257_600.0,
            life_expectancy_diff: Some(727_401_600.0),
        }],
    );

    let written = export_death_details(&dir.path().join("details"), &buckets).unwrap();
    assert_eq!(written, dir.path().join("details.csv"));

    let text = fs::read_to_string(&written).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], "female,1971,100,632793600.0,601257600.0,727401600.0");
}
