#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Raw tabular rows and the canonical normalized incident format.
//!
//! A source document is parsed into [`RawRow`]s keyed by the expected column
//! names, and each row is normalized exactly once into an immutable
//! [`CrimeRecord`].

use chrono::{Datelike as _, NaiveDate};
use crime_dash_crime_models::CrimeCategory;
use serde::{Deserialize, Serialize};

/// Column names every source document must provide, in canonical order.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "date",
    "crime_type",
    "police_station",
    "latitude",
    "longitude",
    "age",
    "cncp_details",
    "crime_descriptions",
];

/// One line of the source document, with every value kept as text.
///
/// Missing trailing columns are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRow {
    /// Incident date as written in the source.
    pub date: String,
    /// Free-text crime type.
    pub crime_type: String,
    /// Name of the reporting police station.
    pub police_station: String,
    /// Latitude as written in the source.
    pub latitude: String,
    /// Longitude as written in the source.
    pub longitude: String,
    /// Age as written in the source.
    pub age: String,
    /// Child-in-need-of-care details.
    pub cncp_details: String,
    /// Narrative description.
    pub crime_descriptions: String,
}

/// A crime incident normalized from a [`RawRow`].
///
/// Records are immutable after construction. Numeric fields that could not
/// be parsed are `None`; such records are still constructible and are
/// removed later by the validity gate (coordinates) or fail range filters
/// (age, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeRecord {
    /// Calendar date of the incident. `None` when the source date is
    /// missing or unparseable.
    pub date: Option<NaiveDate>,
    /// Free-text crime type, unchanged from the source.
    pub crime_type: String,
    /// Reporting police station.
    pub police_station: String,
    /// Latitude (WGS84), possibly replaced by the station lookup table.
    pub latitude: Option<f64>,
    /// Longitude (WGS84), possibly replaced by the station lookup table.
    pub longitude: Option<f64>,
    /// Age of the person involved.
    pub age: Option<i32>,
    /// Child-in-need-of-care details, if any.
    pub cncp_details: Option<String>,
    /// Narrative description, if any.
    pub crime_descriptions: Option<String>,
    /// Category assigned from `crime_type` at normalization time.
    pub category: CrimeCategory,
}

impl CrimeRecord {
    /// Returns the calendar year of the incident, if the date is known.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    /// Returns `(latitude, longitude)` when both coordinates are present.
    #[must_use]
    pub const fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}
