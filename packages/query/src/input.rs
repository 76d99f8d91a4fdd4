//! Control-surface input parsing.
//!
//! The UI, HTTP query strings, and CLI flags all deliver filter values as
//! optional strings. [`FilterInput`] collects them and converts to a
//! [`FilterState`], filling anything unspecified with the defaults.

use chrono::NaiveDate;
use crime_dash_crime_models::CrimeCategory;
use crime_dash_query_models::{CategoryFilter, FilterState, StationFilter, WILDCARD};
use serde::Deserialize;

use crate::QueryError;

/// Raw, all-optional filter values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterInput {
    /// `All` or a category name.
    pub category: Option<String>,
    /// `All` or a station name.
    pub station: Option<String>,
    /// Start date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// End date (`YYYY-MM-DD`).
    pub end_date: Option<String>,
    /// Minimum age.
    pub min_age: Option<String>,
    /// Maximum age.
    pub max_age: Option<String>,
}

impl TryFrom<&FilterInput> for FilterState {
    type Error = QueryError;

    fn try_from(input: &FilterInput) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        Ok(Self {
            category: input
                .category
                .as_deref()
                .map_or(Ok(defaults.category), parse_category)?,
            station: input
                .station
                .as_deref()
                .map_or(defaults.station, parse_station),
            start_date: input
                .start_date
                .as_deref()
                .map_or(Ok(defaults.start_date), parse_date)?,
            end_date: input
                .end_date
                .as_deref()
                .map_or(Ok(defaults.end_date), parse_date)?,
            min_age: input
                .min_age
                .as_deref()
                .map_or(Ok(defaults.min_age), parse_age)?,
            max_age: input
                .max_age
                .as_deref()
                .map_or(Ok(defaults.max_age), parse_age)?,
        })
    }
}

/// Parses a category selection. Only the wildcard and the five displayable
/// categories are selectable.
///
/// # Errors
///
/// Returns [`QueryError::InvalidCategory`] for anything else.
pub fn parse_category(s: &str) -> Result<CategoryFilter, QueryError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case(WILDCARD) {
        return Ok(CategoryFilter::All);
    }
    match s.parse::<CrimeCategory>() {
        Ok(category) if category.is_displayable() => Ok(CategoryFilter::Only(category)),
        _ => Err(QueryError::InvalidCategory {
            value: s.to_string(),
        }),
    }
}

/// Parses a station selection. Station names are taken verbatim; only the
/// exact wildcard label means "all stations".
#[must_use]
pub fn parse_station(s: &str) -> StationFilter {
    if s == WILDCARD {
        StationFilter::All
    } else {
        StationFilter::Only(s.to_string())
    }
}

/// Parses a `YYYY-MM-DD` date bound.
///
/// # Errors
///
/// Returns [`QueryError::InvalidDate`] if the value is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| QueryError::InvalidDate {
        value: s.to_string(),
    })
}

/// Parses an age bound.
///
/// # Errors
///
/// Returns [`QueryError::InvalidAge`] if the value is not an integer.
pub fn parse_age(s: &str) -> Result<i32, QueryError> {
    s.trim().parse::<i32>().map_err(|_| QueryError::InvalidAge {
        value: s.to_string(),
    })
}
