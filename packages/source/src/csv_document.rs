//! CSV document parsing.
//!
//! Parses a UTF-8 document with a header row into [`RawRow`]s. Columns are
//! matched by header name, so column order does not matter and extra columns
//! are ignored. Short rows are tolerated: missing trailing columns become
//! empty strings. Empty lines are skipped.

use crime_dash_source_models::{REQUIRED_COLUMNS, RawRow};

use crate::SourceError;

/// Parses every data row of `text`.
///
/// # Errors
///
/// * [`SourceError::EmptyDocument`] if there is no header row.
/// * [`SourceError::MissingColumns`] if the header lacks a required column.
/// * [`SourceError::Csv`] if the document is not readable as CSV.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(SourceError::EmptyDocument);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| (*col).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SourceError::MissingColumns { columns: missing });
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawRow>() {
        rows.push(result?);
    }

    Ok(rows)
}
