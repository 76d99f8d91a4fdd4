#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation engine for the filtered incident set.
//!
//! [`derive_views`] turns a record set and a [`FilterState`] into the four
//! chart views. [`dashboard::Dashboard`] wraps that in a session that keeps
//! the current filter and the most recent snapshot.

pub mod dashboard;
pub mod views;

use crime_dash_analytics_models::DerivedViews;
use crime_dash_query::filter_records;
use crime_dash_query_models::FilterState;
use crime_dash_source_models::CrimeRecord;

/// Computes all four views over an already-filtered record set.
#[must_use]
pub fn aggregate(filtered: &[CrimeRecord]) -> DerivedViews {
    DerivedViews {
        total: filtered.len() as u64,
        categories: views::category_distribution(filtered),
        trend: views::yearly_trend(filtered),
        ages: views::age_histogram(filtered),
        summary: views::summary_stats(filtered),
    }
}

/// Filters `records` by `filter` and computes all four views.
#[must_use]
pub fn derive_views(records: &[CrimeRecord], filter: &FilterState) -> DerivedViews {
    aggregate(&filter_records(records, filter))
}
