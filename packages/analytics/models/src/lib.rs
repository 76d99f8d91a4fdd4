#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived statistical views over a filtered incident set.
//!
//! These are pure result types. They hold no state of their own and are
//! rebuilt whenever the filtered set changes.

use crime_dash_crime_models::CrimeCategory;
use serde::{Deserialize, Serialize};

/// Width of an age histogram bucket, in years.
pub const AGE_BUCKET_WIDTH: i32 = 5;

/// Count of incidents in a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// The category.
    pub category: CrimeCategory,
    /// Number of incidents.
    pub count: u64,
}

/// Incident count for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Year label (e.g. "2021").
    pub year: String,
    /// Number of incidents in that year.
    pub count: u64,
}

/// One age histogram bucket covering `low..=low + 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBucket {
    /// Lowest age in the bucket (a multiple of [`AGE_BUCKET_WIDTH`]).
    pub low: i32,
    /// Number of incidents in the bucket.
    pub count: u64,
}

impl AgeBucket {
    /// Highest age in the bucket.
    #[must_use]
    pub const fn high(&self) -> i32 {
        self.low + AGE_BUCKET_WIDTH - 1
    }

    /// Display label, e.g. `"10-14"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.low, self.high())
    }
}

/// Summary table row for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    /// The category.
    pub category: CrimeCategory,
    /// Number of incidents.
    pub count: u64,
    /// Share of the filtered set, in percent, rounded to one decimal.
    pub percentage: f64,
    /// Mean age, rounded to one decimal. `None` when no incident in the
    /// category has a known age.
    pub average_age: Option<f64>,
}

impl SummaryRow {
    /// Percentage formatted for display, e.g. `"50.0%"`.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }

    /// Average age formatted for display, e.g. `"10.0"`, or `"n/a"`.
    #[must_use]
    pub fn average_age_label(&self) -> String {
        self.average_age
            .map_or_else(|| "n/a".to_string(), |age| format!("{age:.1}"))
    }
}

/// All four views computed from one filtered set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedViews {
    /// Size of the filtered set.
    pub total: u64,
    /// Displayable category counts in display order, zero counts omitted.
    pub categories: Vec<CategoryCount>,
    /// Per-year counts, ascending.
    pub trend: Vec<TrendPoint>,
    /// Non-empty age buckets, ascending.
    pub ages: Vec<AgeBucket>,
    /// One row per category present, in first-occurrence order.
    pub summary: Vec<SummaryRow>,
}

impl DerivedViews {
    /// Whether the views describe an empty filtered set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Rounds to one decimal place.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_labels_span_five_years() {
        assert_eq!(AgeBucket { low: 10, count: 1 }.label(), "10-14");
        assert_eq!(AgeBucket { low: 0, count: 1 }.label(), "0-4");
        assert_eq!(AgeBucket { low: 95, count: 1 }.high(), 99);
    }

    #[test]
    fn summary_labels() {
        let row = SummaryRow {
            category: CrimeCategory::Petty,
            count: 1,
            percentage: 50.0,
            average_age: Some(10.0),
        };
        assert_eq!(row.percentage_label(), "50.0%");
        assert_eq!(row.average_age_label(), "10.0");

        let row = SummaryRow {
            average_age: None,
            ..row
        };
        assert_eq!(row.average_age_label(), "n/a");
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert!((round_one_decimal(33.333) - 33.3).abs() < 1e-9);
        assert!((round_one_decimal(66.666) - 66.7).abs() < 1e-9);
        assert!((round_one_decimal(10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn default_views_are_empty() {
        let views = DerivedViews::default();
        assert!(views.is_empty());
        let json = serde_json::to_value(&views).unwrap();
        assert_eq!(json["categories"], serde_json::json!([]));
    }
}
