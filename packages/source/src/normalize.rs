//! Raw row to [`CrimeRecord`] normalization.

use crime_dash_source_models::{CrimeRecord, RawRow};

use crate::parsing::{optional_text, parse_age, parse_coordinate, parse_date};
use crate::stations::StationTable;
use crate::type_mapping::map_crime_type;

/// Normalizes a single raw row.
///
/// Coordinates come from the station table when the station name matches,
/// otherwise from the row itself. The category is assigned here and never
/// recomputed.
#[must_use]
pub fn normalize_row(row: RawRow, stations: &StationTable) -> CrimeRecord {
    let (latitude, longitude) = stations.lookup(&row.police_station).map_or_else(
        || {
            (
                parse_coordinate(&row.latitude),
                parse_coordinate(&row.longitude),
            )
        },
        |c| (Some(c.latitude), Some(c.longitude)),
    );

    let date = parse_date(&row.date);
    if date.is_none() {
        log::debug!("Unparseable date {:?}", row.date);
    }
    let age = parse_age(&row.age);
    if age.is_none() {
        log::debug!("Unparseable age {:?}", row.age);
    }

    CrimeRecord {
        date,
        category: map_crime_type(&row.crime_type),
        crime_type: row.crime_type,
        police_station: row.police_station,
        latitude,
        longitude,
        age,
        cncp_details: optional_text(row.cncp_details),
        crime_descriptions: optional_text(row.crime_descriptions),
    }
}

/// Normalizes every row, preserving order and length.
#[must_use]
pub fn normalize_rows(rows: Vec<RawRow>, stations: &StationTable) -> Vec<CrimeRecord> {
    rows.into_iter()
        .map(|row| normalize_row(row, stations))
        .collect()
}
