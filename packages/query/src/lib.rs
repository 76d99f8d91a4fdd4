#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Query filter engine.
//!
//! Evaluates a [`FilterState`] against the full valid record set. Every
//! evaluation starts from scratch; there is no incremental filtering. The
//! result keeps the input order.

pub mod input;

use std::collections::BTreeSet;

use crime_dash_query_models::FilterState;
use crime_dash_source_models::CrimeRecord;

/// Errors produced while interpreting control-surface input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The category is neither the wildcard nor a selectable category.
    #[error("Invalid category '{value}'. Expected All, petty, serious, heinous, ccl, or cncp")]
    InvalidCategory {
        /// The rejected input.
        value: String,
    },

    /// The date is not `YYYY-MM-DD`.
    #[error("Invalid date '{value}'. Expected format: YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// The age is not an integer.
    #[error("Invalid age '{value}'. Expected a whole number")]
    InvalidAge {
        /// The rejected input.
        value: String,
    },
}

/// Whether `record` satisfies every predicate of `filter`.
///
/// A record without a date or age fails the corresponding range check.
#[must_use]
pub fn matches(record: &CrimeRecord, filter: &FilterState) -> bool {
    let within_date_range = record
        .date
        .is_some_and(|d| filter.start_date <= d && d <= filter.end_date);
    let matches_category = filter.category.accepts(record.category);
    let matches_station = filter.station.accepts(&record.police_station);
    let within_age_range = record
        .age
        .is_some_and(|a| filter.min_age <= a && a <= filter.max_age);

    within_date_range && matches_category && matches_station && within_age_range
}

/// Returns the records matching `filter`, in input order.
#[must_use]
pub fn filter_records(records: &[CrimeRecord], filter: &FilterState) -> Vec<CrimeRecord> {
    let filtered: Vec<CrimeRecord> = records
        .iter()
        .filter(|r| matches(r, filter))
        .cloned()
        .collect();

    log::debug!(
        "Filter {} / {} / {}..={} / ages {}..={}: {} of {} records",
        filter.category,
        filter.station,
        filter.start_date,
        filter.end_date,
        filter.min_age,
        filter.max_age,
        filtered.len(),
        records.len()
    );

    filtered
}

/// Returns the distinct station names in first-seen order.
///
/// These are the station selector's options, not counting the wildcard.
#[must_use]
pub fn station_options(records: &[CrimeRecord]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.police_station.as_str()))
        .map(|r| r.police_station.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crime_dash_crime_models::CrimeCategory;
    use crime_dash_query_models::{CategoryFilter, StationFilter};
    use crime_dash_source::normalize::normalize_row;
    use crime_dash_source::stations::StationTable;
    use crime_dash_source_models::RawRow;

    use super::*;

    fn record(date: &str, category: CrimeCategory, station: &str, age: Option<i32>) -> CrimeRecord {
        CrimeRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            crime_type: category.to_string(),
            police_station: station.to_string(),
            latitude: Some(12.9),
            longitude: Some(77.5),
            age,
            cncp_details: None,
            crime_descriptions: None,
            category,
        }
    }

    fn sample() -> Vec<CrimeRecord> {
        vec![
            record("2020-05-01", CrimeCategory::Petty, "Sheshadripuram", Some(10)),
            record("2021-07-01", CrimeCategory::Heinous, "Kengeri", Some(30)),
            record("2016-01-01", CrimeCategory::Serious, "Kengeri", Some(5)),
            record("2024-01-01", CrimeCategory::Uncategorized, "Madivala", Some(100)),
        ]
    }

    #[test]
    fn default_filter_returns_everything_unchanged() {
        let records = sample();
        assert_eq!(filter_records(&records, &FilterState::default()), records);
    }

    #[test]
    fn bounds_are_inclusive() {
        let records = sample();
        let filter = FilterState {
            start_date: NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            min_age: 5,
            max_age: 100,
            ..FilterState::default()
        };
        assert_eq!(filter_records(&records, &filter).len(), 4);

        let narrow = FilterState {
            start_date: NaiveDate::from_ymd_opt(2016, 1, 2).unwrap(),
            max_age: 99,
            ..FilterState::default()
        };
        let kept = filter_records(&records, &narrow);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].category, CrimeCategory::Petty);
        assert_eq!(kept[1].category, CrimeCategory::Heinous);
    }

    #[test]
    fn min_age_excludes_younger_records() {
        let filter = FilterState {
            min_age: 20,
            ..FilterState::default()
        };
        let kept = filter_records(&sample()[..2], &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].category, CrimeCategory::Heinous);
    }

    #[test]
    fn category_and_station_are_conjunctive() {
        let filter = FilterState {
            category: CategoryFilter::Only(CrimeCategory::Serious),
            station: StationFilter::Only("Kengeri".to_string()),
            ..FilterState::default()
        };
        let kept = filter_records(&sample(), &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].age, Some(5));

        let filter = FilterState {
            category: CategoryFilter::Only(CrimeCategory::Petty),
            station: StationFilter::Only("Kengeri".to_string()),
            ..FilterState::default()
        };
        assert!(filter_records(&sample(), &filter).is_empty());
    }

    #[test]
    fn ccl_selection_is_empty_because_it_is_never_derived() {
        let mut records = sample();
        records.push(record("2020-01-01", CrimeCategory::Uncategorized, "Kengeri", Some(12)));
        let filter = FilterState {
            category: CategoryFilter::Only(CrimeCategory::Ccl),
            ..FilterState::default()
        };
        assert!(filter_records(&records, &filter).is_empty());
    }

    #[test]
    fn timestamped_record_on_end_date_matches() {
        let row = RawRow {
            date: "2024-01-01T23:59:59".to_string(),
            crime_type: "Petty".to_string(),
            police_station: "Madivala".to_string(),
            age: "30".to_string(),
            ..RawRow::default()
        };
        let record = normalize_row(row, &StationTable::embedded());

        let filter = FilterState::default();
        assert_eq!(filter.end_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(matches(&record, &filter));

        let day_before = FilterState {
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            ..FilterState::default()
        };
        assert!(!matches(&record, &day_before));
    }

    #[test]
    fn missing_age_or_date_never_matches() {
        let records = vec![
            record("2020-05-01", CrimeCategory::Petty, "Kengeri", None),
            record("garbage", CrimeCategory::Petty, "Kengeri", Some(20)),
        ];
        assert!(filter_records(&records, &FilterState::default()).is_empty());
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let filter = FilterState {
            min_age: 50,
            max_age: 10,
            ..FilterState::default()
        };
        assert!(filter_records(&sample(), &filter).is_empty());
    }

    #[test]
    fn result_is_an_ordered_subset() {
        let records = sample();
        let filter = FilterState {
            station: StationFilter::Only("Kengeri".to_string()),
            ..FilterState::default()
        };
        let kept = filter_records(&records, &filter);
        let mut cursor = records.iter();
        for r in &kept {
            assert!(cursor.any(|c| c == r), "result is not an ordered subset");
        }
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(filter_records(&[], &FilterState::default()).is_empty());
        assert!(station_options(&[]).is_empty());
    }

    #[test]
    fn station_options_are_distinct_in_first_seen_order() {
        assert_eq!(
            station_options(&sample()),
            ["Sheshadripuram", "Kengeri", "Madivala"]
        );
    }
}
