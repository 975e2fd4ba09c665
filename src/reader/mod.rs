//! Module for reading ancestors and reference tables from CSV, and for
//! exporting enriched records.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::error::util::{safe_create_file, safe_open_file};
use crate::error::{LongevityError, Result};
use crate::models::reference::YEAR_COLUMN;
use crate::models::{ByGender, EnrichedDeathRecord, IndividualRecord, ReferenceYearStats};
use crate::reference::ReferenceTableIndex;
use crate::schema::field_mapping::{map_row, symbolize_header};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input)
}

/// Parse ancestors from CSV with a header row
pub fn parse_individuals<R: Read>(input: R) -> Result<Vec<IndividualRecord>> {
    let mut reader = csv_reader(input);
    let headers = reader.headers()?.clone();

    let mut individuals = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields = map_row(headers.iter(), row.iter());
        individuals.push(IndividualRecord::from_fields(&fields));
    }
    Ok(individuals)
}

/// Parse a mortality reference table from CSV with a header row
///
/// Headers are symbolized before use. Rows without a year are dropped.
pub fn parse_reference_table<R: Read>(input: R, source: &Path) -> Result<Vec<ReferenceYearStats>> {
    let mut reader = csv_reader(input);
    let headers: Vec<String> = reader.headers()?.iter().map(symbolize_header).collect();
    if !headers.iter().any(|h| h == YEAR_COLUMN) {
        return Err(LongevityError::missing_column(YEAR_COLUMN, source));
    }

    let mut rows = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row?;
        let fields = map_row(headers.iter().map(String::as_str), row.iter());
        match ReferenceYearStats::from_fields(&fields) {
            Some(stats) => rows.push(stats),
            None => log_warning(
                &format!("Reference row {} has no year; ignoring it", line + 1),
                Some(source),
            ),
        }
    }
    Ok(rows)
}

/// Read the ancestors CSV file
pub fn read_individuals(path: &Path) -> Result<Vec<IndividualRecord>> {
    log_operation_start("Reading ancestors from", path);
    let start = Instant::now();
    let individuals = parse_individuals(safe_open_file(path, "ancestor records")?)?;
    log_operation_complete("read", path, individuals.len(), Some(start.elapsed()));
    Ok(individuals)
}

/// Read one reference table CSV file
pub fn read_reference_table(path: &Path) -> Result<Vec<ReferenceYearStats>> {
    log_operation_start("Reading mortality statistics from", path);
    let rows = parse_reference_table(safe_open_file(path, "mortality statistics")?, path)?;
    log_operation_complete("read", path, rows.len(), None);
    Ok(rows)
}

/// Read both reference tables and index them
pub fn load_reference_index(male: &Path, female: &Path) -> Result<ReferenceTableIndex> {
    Ok(ReferenceTableIndex::build(
        read_reference_table(male)?,
        read_reference_table(female)?,
    ))
}

#[derive(Debug, Serialize)]
struct DeathDetailRow<'a> {
    #[serde(rename = "Gender")]
    gender: &'a str,
    #[serde(rename = "Year of death")]
    year_of_death: i32,
    #[serde(rename = "Age at death (years)")]
    age_at_death: i64,
    #[serde(rename = "Modal death age diff (seconds)")]
    modal_diff: f64,
    #[serde(rename = "Median death age diff (seconds)")]
    median_diff: f64,
    #[serde(rename = "Life expectancy diff (seconds)")]
    life_expectancy_diff: Option<f64>,
}

/// Write enriched records as CSV, males first, each bucket in input order
pub fn write_death_details<W: Write>(
    output: W,
    buckets: &ByGender<Vec<EnrichedDeathRecord>>,
) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(output);
    let mut written = 0;
    for (gender, records) in buckets.iter() {
        for record in records {
            writer.serialize(DeathDetailRow {
                gender: gender.as_str(),
                year_of_death: record.year_of_death,
                age_at_death: record.age_at_death,
                modal_diff: record.modal_diff,
                median_diff: record.median_diff,
                life_expectancy_diff: record.life_expectancy_diff,
            })?;
            written += 1;
        }
    }
    writer
        .flush()
        .map_err(|e| LongevityError::CsvError(e.into()))?;
    Ok(written)
}

/// Ensure an export file name ends in `.csv`
#[must_use]
pub fn csv_export_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "csv") {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".csv");
        PathBuf::from(name)
    }
}

/// Export enriched records to a CSV file, returning the path written
pub fn export_death_details(
    path: &Path,
    buckets: &ByGender<Vec<EnrichedDeathRecord>>,
) -> Result<PathBuf> {
    let path = csv_export_path(path);
    log_operation_start("Writing death details to", &path);
    let written = write_death_details(safe_create_file(&path, "death detail export")?, buckets)?;
    log_operation_complete("wrote", &path, written, None);
    Ok(path)
}
