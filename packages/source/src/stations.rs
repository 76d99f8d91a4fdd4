//! Police station coordinate lookup table.
//!
//! The default table is a TOML document baked into the binary with
//! [`include_str!`]. A replacement table can be loaded from disk at startup.
//! Lookups match the station name exactly (case-sensitive).

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::SourceError;

/// Station table embedded at compile time.
const DEFAULT_STATIONS_TOML: &str = include_str!("../stations/bengaluru.toml");

/// Fixed coordinates for one police station.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StationCoordinates {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct StationFile {
    #[serde(default)]
    stations: Vec<StationEntry>,
}

#[derive(Debug, Deserialize)]
struct StationEntry {
    name: String,
    latitude: f64,
    longitude: f64,
}

/// Immutable station name to coordinate mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationTable {
    entries: BTreeMap<String, StationCoordinates>,
}

impl StationTable {
    /// Returns the embedded default table.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed (this is a compile-time
    /// guarantee since the config is embedded).
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_toml(DEFAULT_STATIONS_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse embedded station table: {e}"))
    }

    /// Parses a station table from a TOML document.
    ///
    /// A later entry with the same name replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::StationConfig`] if the document is not a valid
    /// station table.
    pub fn from_toml(toml_str: &str) -> Result<Self, SourceError> {
        let file: StationFile = toml::from_str(toml_str)?;
        let entries = file
            .stations
            .into_iter()
            .map(|s| {
                (
                    s.name,
                    StationCoordinates {
                        latitude: s.latitude,
                        longitude: s.longitude,
                    },
                )
            })
            .collect();
        Ok(Self { entries })
    }

    /// Loads a station table from a TOML file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file cannot be read or parsed.
    pub async fn from_path(path: &Path) -> Result<Self, SourceError> {
        log::info!("Loading station table from {}", path.display());
        let text = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&text)
    }

    /// Returns the fixed coordinates for `station`, if it is in the table.
    #[must_use]
    pub fn lookup(&self, station: &str) -> Option<StationCoordinates> {
        self.entries.get(station).copied()
    }

    /// Number of stations in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
