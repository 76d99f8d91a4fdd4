#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime dataset ingestion and normalization.
//!
//! A [`DatasetSource`] provides the raw CSV text. [`load_dataset`] parses it,
//! normalizes every row into a [`CrimeRecord`], and applies the validity
//! gate once, so that every downstream consumer only ever sees records with
//! usable coordinates.

pub mod csv_document;
pub mod fetch;
pub mod normalize;
pub mod parsing;
pub mod stations;
pub mod type_mapping;
pub mod validity;

use std::sync::Arc;

use async_trait::async_trait;
use crime_dash_source_models::CrimeRecord;

use crate::stations::StationTable;

/// Errors that can occur while loading a dataset.
///
/// Any of these is fatal to the initial load. Malformed individual values
/// are never errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not readable as CSV.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one or more required columns.
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Names of the absent columns.
        columns: Vec<String>,
    },

    /// The document has no header row.
    #[error("Dataset is empty")]
    EmptyDocument,

    /// The station lookup table is malformed.
    #[error("Invalid station table: {0}")]
    StationConfig(#[from] toml::de::Error),
}

/// Trait that all dataset providers implement.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Returns a human-readable label for log messages.
    fn label(&self) -> &str;

    /// Retrieves the full CSV document.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the document cannot be retrieved.
    async fn fetch_text(&self) -> Result<String, SourceError>;
}

/// The validated working dataset.
///
/// `records` is read-only once established and cheap to share.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Label of the source the dataset came from.
    pub label: String,
    /// Geographically valid records in source order.
    pub records: Arc<[CrimeRecord]>,
    /// Number of data rows in the source document.
    pub raw_count: usize,
}

impl Dataset {
    /// Number of rows the validity gate removed.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.raw_count - self.records.len()
    }
}

/// Normalizes and validates an already-fetched document.
///
/// # Errors
///
/// Returns [`SourceError`] if the document cannot be parsed.
pub fn build_dataset(
    label: &str,
    text: &str,
    stations: &StationTable,
) -> Result<Dataset, SourceError> {
    let rows = csv_document::parse_rows(text)?;
    let raw_count = rows.len();

    let normalized = normalize::normalize_rows(rows, stations);
    let valid = validity::retain_valid(normalized);

    log::info!(
        "[{label}] {raw_count} rows, {} valid, {} without usable coordinates",
        valid.len(),
        raw_count - valid.len()
    );

    Ok(Dataset {
        label: label.to_owned(),
        records: valid.into(),
        raw_count,
    })
}

/// Fetches, normalizes, and validates a dataset.
///
/// Nothing is returned unless the whole document loaded; there is no
/// partial dataset.
///
/// # Errors
///
/// Returns [`SourceError`] if the source cannot be fetched or parsed.
pub async fn load_dataset(
    source: &dyn DatasetSource,
    stations: &StationTable,
) -> Result<Dataset, SourceError> {
    log::info!("[{}] Fetching dataset", source.label());
    let text = source.fetch_text().await?;
    build_dataset(source.label(), &text, stations)
}
