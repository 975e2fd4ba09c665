//! End-to-end tests from CSV files to report sentences

use ancestor_longevity::{
    AggregateStatsCalculator, DeathDetailExtractor, LongevityConfig, ReportAssembler,
    load_reference_index, read_individuals,
};

use crate::utils::{ANCESTORS, FEMALE_DEATH_STATS, MALE_DEATH_STATS, write_fixture};

#[test]
fn test_full_pipeline_report() {
    let dir = tempfile::tempdir().unwrap();
    let male = write_fixture(dir.path(), "male_death_stats.csv", MALE_DEATH_STATS);
    let female = write_fixture(dir.path(), "female_death_stats.csv", FEMALE_DEATH_STATS);
    let ancestors_path = write_fixture(dir.path(), "direct-ancestors.csv", ANCESTORS);

    let config = LongevityConfig::default();
    let index = load_reference_index(&male, &female).unwrap();
    let ancestors = read_individuals(&ancestors_path).unwrap();

    let extraction = DeathDetailExtractor::new(&index, &config).extract_with_diagnostics(&ancestors);
    assert_eq!(extraction.buckets.male.len(), 2);
    assert_eq!(extraction.buckets.female.len(), 3);

    let counts = extraction.rejection_counts();
    assert_eq!(counts["insufficient_data"], 3);
    assert!(!counts.contains_key("unparseable_death_date"));
    assert_eq!(counts["childhood_death"], 1);
    assert_eq!(counts["no_reference_year"], 1);

    let aggregates = AggregateStatsCalculator::new(&config).calculate_each(&extraction.buckets);
    let reports = ReportAssembler::assemble(&extraction.buckets, &aggregates);

    assert_eq!(
        reports[0].lines,
        vec![
            "male ancestors in the provided dataset lived 2.25 fewer years than the UK's male modal age of death in the year they died (0/2 outlived the mode)",
            "male ancestors in the provided dataset lived 3.25 fewer years than the UK's male median age of death in the year they died (0/2 outlived the median)",
            "male ancestors in the provided dataset lived 0.25 fewer years than the UK's male life expectancy at birth in the year they died (1/2 outlived it)",
            "Calculated from 2 male ancestors who died between 1970 and 1971",
        ]
    );
    assert_eq!(
        reports[1].lines,
        vec![
            "female ancestors in the provided dataset lived 17.4 more years than the UK's female modal age of death in the year they died (3/3 outlived the mode)",
            "female ancestors in the provided dataset lived 16.4 more years than the UK's female median age of death in the year they died (3/3 outlived the median)",
            "female ancestors in the provided dataset lived 20.4 more years than the UK's female life expectancy at birth in the year they died (3/3 outlived it)",
            "Calculated from 3 female ancestors who died between 1970 and 1971",
        ]
    );
}

#[test]
fn test_report_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let male = write_fixture(dir.path(), "male.csv", MALE_DEATH_STATS);
    let female = write_fixture(dir.path(), "female.csv", "year,modal_age_at_death\n");
    let ancestors_path = write_fixture(dir.path(), "ancestors.csv", ANCESTORS);

    let config = LongevityConfig::default();
    let index = load_reference_index(&male, &female).unwrap();
    let ancestors = read_individuals(&ancestors_path).unwrap();
    let buckets = DeathDetailExtractor::new(&index, &config).extract(&ancestors);
    assert!(buckets.female.is_empty());

    let aggregates = AggregateStatsCalculator::new(&config).calculate_each(&buckets);
    let reports = ReportAssembler::assemble(&buckets, &aggregates);
    let json = serde_json::to_value(&reports).unwrap();

    assert_eq!(json[0]["gender"], "male");
    assert_eq!(json[0]["stats"]["modal_diff"], -2.25);
    assert_eq!(json[0]["summary"]["ancestor_count"], 2);
    assert_eq!(json[1]["gender"], "female");
    assert!(json[1].get("stats").is_none());
    assert_eq!(
        json[1]["lines"][0],
        "Insufficient data to compare female ancestors"
    );
}
