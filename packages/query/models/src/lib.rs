#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive filter state.
//!
//! A [`FilterState`] is a snapshot of every predicate the control surface
//! can set. It is a plain value: changing a filter means building a new
//! state and re-running the query over the full dataset.

use chrono::NaiveDate;
use crime_dash_crime_models::CrimeCategory;
use serde::Serialize;

/// Wildcard label used by the control surface for "no restriction".
pub const WILDCARD: &str = "All";

/// Default start of the date range.
pub const DEFAULT_START_DATE: NaiveDate = ymd(2016, 1, 1);
/// Default end of the date range.
pub const DEFAULT_END_DATE: NaiveDate = ymd(2024, 1, 1);
/// Default lower age bound.
pub const DEFAULT_MIN_AGE: i32 = 5;
/// Default upper age bound.
pub const DEFAULT_MAX_AGE: i32 = 100;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid default date"),
    }
}

/// Category selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum CategoryFilter {
    /// Every category matches.
    #[default]
    All,
    /// Only records of this category match.
    Only(CrimeCategory),
}

impl CategoryFilter {
    /// Whether `category` passes this selection.
    #[must_use]
    pub fn accepts(self, category: CrimeCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(WILDCARD),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.to_string()
    }
}

/// Police station selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum StationFilter {
    /// Every station matches.
    #[default]
    All,
    /// Only records from this station (exact name) match.
    Only(String),
}

impl StationFilter {
    /// Whether `station` passes this selection.
    #[must_use]
    pub fn accepts(&self, station: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == station,
        }
    }
}

impl std::fmt::Display for StationFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(WILDCARD),
            Self::Only(station) => f.write_str(station),
        }
    }
}

impl From<StationFilter> for String {
    fn from(value: StationFilter) -> Self {
        value.to_string()
    }
}

/// The conjunction of all active predicates.
///
/// Date and age bounds are inclusive. An inverted range is allowed and
/// simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Category selection.
    pub category: CategoryFilter,
    /// Police station selection.
    pub station: StationFilter,
    /// First calendar date included.
    pub start_date: NaiveDate,
    /// Last calendar date included.
    pub end_date: NaiveDate,
    /// Lowest age included.
    pub min_age: i32,
    /// Highest age included.
    pub max_age: i32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            station: StationFilter::All,
            start_date: DEFAULT_START_DATE,
            end_date: DEFAULT_END_DATE,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}
