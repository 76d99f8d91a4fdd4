//! Geographic validity gate.
//!
//! Applied once to the full normalized dataset, before any query filter sees
//! it. Records without usable coordinates never reach the map, the charts,
//! or the summary.

use crime_dash_source_models::CrimeRecord;

/// Whether both coordinates are present, finite, and non-zero.
#[must_use]
pub fn is_geographically_valid(record: &CrimeRecord) -> bool {
    record
        .coordinates()
        .is_some_and(|(lat, lng)| is_usable(lat) && is_usable(lng))
}

#[allow(clippy::float_cmp)]
fn is_usable(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// Keeps only geographically valid records, preserving order.
#[must_use]
pub fn retain_valid(mut records: Vec<CrimeRecord>) -> Vec<CrimeRecord> {
    records.retain(is_geographically_valid);
    records
}

#[cfg(test)]
mod tests {
    use crime_dash_crime_models::CrimeCategory;

    use super::*;

    fn at(lat: Option<f64>, lng: Option<f64>) -> CrimeRecord {
        CrimeRecord {
            date: None,
            crime_type: "petty".to_string(),
            police_station: "Kengeri".to_string(),
            latitude: lat,
            longitude: lng,
            age: None,
            cncp_details: None,
            crime_descriptions: None,
            category: CrimeCategory::Petty,
        }
    }

    #[test]
    fn accepts_finite_non_zero() {
        assert!(is_geographically_valid(&at(Some(12.9), Some(77.5))));
        assert!(is_geographically_valid(&at(Some(-33.8), Some(-70.6))));
    }

    #[test]
    fn rejects_missing_zero_and_infinite() {
        assert!(!is_geographically_valid(&at(None, Some(77.5))));
        assert!(!is_geographically_valid(&at(Some(0.0), Some(77.5))));
        assert!(!is_geographically_valid(&at(Some(12.9), Some(-0.0))));
        assert!(!is_geographically_valid(&at(Some(f64::INFINITY), Some(77.5))));
    }

    #[test]
    fn retain_is_idempotent() {
        let records = vec![
            at(Some(1.0), Some(2.0)),
            at(Some(0.0), Some(0.0)),
            at(None, None),
            at(Some(3.0), Some(4.0)),
        ];
        let once = retain_valid(records);
        let twice = retain_valid(once.clone());
        assert_eq!(once.len(), 2);
        assert_eq!(once, twice);
        assert_eq!(once[1].latitude, Some(3.0));
    }
}
