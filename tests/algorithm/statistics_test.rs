//! Tests for aggregate statistics and report phrasing

use ancestor_longevity::{
    AggregateStatsCalculator, AggregationMode, BucketSummary, ByGender, EnrichedDeathRecord,
    Gender, LongevityConfig, LongevityError, ReportAssembler, SECONDS_IN_NON_LEAP_YEAR,
    calculate_death_diff_stats, compose_message, extract_death_details,
};

use crate::utils::sample_reference_index;

fn diffs(modal_years: f64, median_years: f64) -> EnrichedDeathRecord {
    let spy = SECONDS_IN_NON_LEAP_YEAR as f64;
    EnrichedDeathRecord {
        year_of_death: 1950,
        age_at_death: 60,
        modal_diff: modal_years * spy,
        median_diff: median_years * spy,
        life_expectancy_diff: None,
    }
}

#[test]
fn test_calculates_average_modal_and_median_diffs() {
    let buckets = ByGender::new(
        vec![diffs(5.0, -3.0), diffs(6.0, -4.0), diffs(7.0, -5.0)],
        vec![diffs(4.0, 1.5), diffs(5.0, 1.75), diffs(6.0, 2.0)],
    );

    let result = calculate_death_diff_stats(&buckets).unwrap();
    assert_eq!(result.male.modal_diff, 6.0);
    assert_eq!(result.male.median_diff, -4.0);
    assert_eq!(result.female.modal_diff, 5.0);
    assert_eq!(result.female.median_diff, 1.75);
}

#[test]
fn test_averages_round_to_two_decimals() {
    let buckets = extract_death_details(
        &[
            ancestor_longevity::IndividualRecord::new("1900-01-01", "1970-06-01", "Male"),
            ancestor_longevity::IndividualRecord::new("1901-01-01", "1971", "Male"),
        ],
        &sample_reference_index(),
    );

    let stats = AggregateStatsCalculator::default()
        .calculate_gender(Gender::Male, &buckets.male)
        .unwrap();
    assert_eq!(stats.modal_diff, -2.25);
    assert_eq!(stats.median_diff, -3.25);
    assert_eq!(stats.life_expectancy_diff, Some(-0.25));
}

#[test]
fn test_empty_bucket_is_insufficient_data() {
    let buckets = ByGender::new(vec![diffs(1.0, 1.0)], Vec::new());
    let err = calculate_death_diff_stats(&buckets).unwrap_err();
    assert!(err.is_insufficient_data());
    assert!(matches!(
        err,
        LongevityError::InsufficientData {
            gender: Gender::Female
        }
    ));
}

#[test]
fn test_empty_bucket_parity_mode() {
    let config = LongevityConfig::default().with_aggregation_mode(AggregationMode::Parity);
    let buckets = ByGender::new(vec![diffs(1.0, 1.0)], Vec::new());
    let result = AggregateStatsCalculator::new(&config)
        .calculate(&buckets)
        .unwrap();
    assert_eq!(result.male.modal_diff, 1.0);
    assert!(result.female.modal_diff.is_nan());
}

#[test]
fn test_summary_invariants() {
    let buckets = extract_death_details(
        &[
            ancestor_longevity::IndividualRecord::new("1871-01-01", "1971-01-01", "Female"),
            ancestor_longevity::IndividualRecord::new("1880-01-01", "1 January 1970", "Female"),
            ancestor_longevity::IndividualRecord::new("1930-01-01", "1970-01-01", "Female"),
        ],
        &sample_reference_index(),
    );
    let summary = BucketSummary::from_records(&buckets.female);

    assert_eq!(summary.ancestor_count, 3);
    assert!(summary.earliest_death <= summary.latest_death);
    assert_eq!(summary.earliest_death, Some(1970));
    assert_eq!(summary.latest_death, Some(1971));
    assert_eq!(summary.count_outlived_modal, 2);
    assert!(summary.count_outlived_modal <= summary.ancestor_count);
    assert!(summary.count_outlived_median <= summary.ancestor_count);
}

#[test]
fn test_compose_message_contract() {
    assert_eq!(compose_message(5.0), "5 more years");
    assert_eq!(compose_message(-3.0), "3 fewer years");
    assert_eq!(compose_message(0.0), "0 more years");
}

#[test]
fn test_report_lines_follow_sign() {
    let buckets = ByGender::new(vec![diffs(-2.0, 3.5)], vec![diffs(1.0, 1.0)]);
    let aggregates = AggregateStatsCalculator::default().calculate_each(&buckets);
    let reports = ReportAssembler::assemble(&buckets, &aggregates);

    assert_eq!(
        reports[0].lines[0],
        "male ancestors in the provided dataset lived 2 fewer years than the UK's male modal age of death in the year they died (0/1 outlived the mode)"
    );
    assert_eq!(
        reports[0].lines[1],
        "male ancestors in the provided dataset lived 3.5 more years than the UK's male median age of death in the year they died (1/1 outlived the median)"
    );
    assert_eq!(
        reports[0].lines[2],
        "Calculated from 1 male ancestors who died between 1950 and 1950"
    );
}
