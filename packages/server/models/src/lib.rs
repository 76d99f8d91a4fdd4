#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API response types for the crime dashboard server.
//!
//! These types are serialized to JSON for the map and chart frontends. They
//! are separate from the pipeline types to allow independent evolution of
//! the API contract.

use chrono::NaiveDate;
use crime_dash_analytics_models::{DerivedViews, SummaryRow};
use crime_dash_crime_models::{CrimeCategory, LegendEntry, MarkerStyle};
use crime_dash_source_models::CrimeRecord;
use serde::Serialize;

/// Dataset label for the bar chart of category counts and the age
/// histogram.
pub const CASES_LABEL: &str = "Number of Cases";
/// Dataset label for the yearly trend line.
pub const TREND_LABEL: &str = "Total Cases per Year";
/// Line color of the yearly trend.
pub const TREND_COLOR: &str = "blue";
/// Bar color of the age histogram.
pub const AGE_COLOR: &str = "teal";

/// A crime incident placed on the map.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIncident {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Free-text crime type.
    pub crime_type: String,
    /// Incident date.
    pub date: Option<NaiveDate>,
    /// Reporting police station.
    pub police_station: String,
    /// Age of the person involved.
    pub age: Option<i32>,
    /// Assigned category.
    pub category: CrimeCategory,
    /// Child-in-need-of-care details for the popup.
    pub cncp_details: Option<String>,
    /// Marker style for the category.
    pub style: MarkerStyle,
}

impl ApiIncident {
    /// Builds a map incident. Returns `None` if the record has no
    /// coordinates.
    #[must_use]
    pub fn from_record(record: &CrimeRecord) -> Option<Self> {
        let (latitude, longitude) = record.coordinates()?;
        Some(Self {
            latitude,
            longitude,
            crime_type: record.crime_type.clone(),
            date: record.date,
            police_station: record.police_station.clone(),
            age: record.age,
            category: record.category,
            cncp_details: record.cncp_details.clone(),
            style: record.category.marker_style(),
        })
    }
}

/// One legend swatch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLegendEntry {
    /// Category name.
    pub name: String,
    /// Swatch color.
    pub color: String,
}

impl From<LegendEntry> for ApiLegendEntry {
    fn from(entry: LegendEntry) -> Self {
        Self {
            name: entry.category.to_string(),
            color: entry.color.to_string(),
        }
    }
}

/// A single color or one color per bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ApiColor {
    /// Same color for every data point.
    Single(String),
    /// One color per data point.
    PerPoint(Vec<String>),
}

/// One dataset of a chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDataset {
    /// Legend label.
    pub label: String,
    /// Values, aligned with the chart labels.
    pub data: Vec<u64>,
    /// Bar fill color(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ApiColor>,
    /// Line color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Whether the area under a line is filled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// Chart labels and datasets.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiChart {
    /// X-axis labels.
    pub labels: Vec<String>,
    /// Datasets plotted against the labels.
    pub datasets: Vec<ApiDataset>,
}

/// One summary table row, formatted for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSummaryRow {
    /// Category name.
    pub category: String,
    /// Number of cases.
    pub count: u64,
    /// Share of the filtered set, e.g. `"50.0%"`.
    pub percentage: String,
    /// Mean age, e.g. `"10.0"`.
    pub average_age: String,
}

impl From<&SummaryRow> for ApiSummaryRow {
    fn from(row: &SummaryRow) -> Self {
        Self {
            category: row.category.to_string(),
            count: row.count,
            percentage: row.percentage_label(),
            average_age: row.average_age_label(),
        }
    }
}

/// Every chart of the analysis view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAnalysis {
    /// Number of incidents in the filtered set.
    pub total: u64,
    /// Bar chart of category counts.
    pub categories: ApiChart,
    /// Line chart of yearly counts.
    pub trend: ApiChart,
    /// Bar chart of the age histogram.
    pub ages: ApiChart,
    /// Summary table rows.
    pub summary: Vec<ApiSummaryRow>,
}

impl From<&DerivedViews> for ApiAnalysis {
    fn from(views: &DerivedViews) -> Self {
        let categories = ApiChart {
            labels: views
                .categories
                .iter()
                .map(|c| c.category.to_string())
                .collect(),
            datasets: vec![ApiDataset {
                label: CASES_LABEL.to_string(),
                data: views.categories.iter().map(|c| c.count).collect(),
                background_color: Some(ApiColor::PerPoint(
                    views
                        .categories
                        .iter()
                        .filter_map(|c| c.category.chart_color())
                        .map(str::to_string)
                        .collect(),
                )),
                border_color: None,
                fill: None,
            }],
        };

        let trend = ApiChart {
            labels: views.trend.iter().map(|p| p.year.clone()).collect(),
            datasets: vec![ApiDataset {
                label: TREND_LABEL.to_string(),
                data: views.trend.iter().map(|p| p.count).collect(),
                background_color: None,
                border_color: Some(TREND_COLOR.to_string()),
                fill: Some(false),
            }],
        };

        let ages = ApiChart {
            labels: views.ages.iter().map(|b| b.label()).collect(),
            datasets: vec![ApiDataset {
                label: CASES_LABEL.to_string(),
                data: views.ages.iter().map(|b| b.count).collect(),
                background_color: Some(ApiColor::Single(AGE_COLOR.to_string())),
                border_color: None,
                fill: None,
            }],
        };

        Self {
            total: views.total,
            categories,
            trend,
            ages,
            summary: views.summary.iter().map(ApiSummaryRow::from).collect(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
    /// Number of records in the working dataset.
    pub records: usize,
}
