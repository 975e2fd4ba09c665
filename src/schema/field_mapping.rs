//! Header and row mapping for tabular input
//!
//! Reference tables are addressed by symbolized headers, so "Modal age at
//! death" and "modal_age_at_death" name the same column. Individual rows keep
//! their headers verbatim.

use std::collections::HashMap;

/// Normalize a header into a symbol-like key
///
/// Lower-cases, drops anything that is neither a word character nor
/// whitespace, trims, and joins the remaining words with underscores.
#[must_use]
pub fn symbolize_header(header: &str) -> String {
    let kept: String = header
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Zip a header row with a data row into a field map
///
/// Empty cells are recorded as absent; cells beyond the header are dropped.
#[must_use]
pub fn map_row<'a>(
    headers: impl IntoIterator<Item = &'a str>,
    values: impl IntoIterator<Item = &'a str>,
) -> HashMap<String, Option<String>> {
    let mut values = values.into_iter();
    headers
        .into_iter()
        .map(|header| {
            let value = values
                .next()
                .filter(|v| !v.is_empty())
                .map(ToString::to_string);
            (header.to_string(), value)
        })
        .collect()
}
