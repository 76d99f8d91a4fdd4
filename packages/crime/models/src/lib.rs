#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime category taxonomy and its presentation tables.
//!
//! Every incident record carries exactly one [`CrimeCategory`]. The five
//! displayable categories have a fixed display order, a chart color, and a
//! map marker style. [`CrimeCategory::Uncategorized`] is a catch-all that is
//! never charted and falls back to the default marker style.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Incident classification derived from the free-text crime type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CrimeCategory {
    /// Minor offenses
    Petty,
    /// Serious offenses
    Serious,
    /// Heinous offenses
    Heinous,
    /// Child in conflict with law
    Ccl,
    /// Child in need of care and protection
    Cncp,
    /// Anything the classifier does not recognize
    Uncategorized,
}

impl CrimeCategory {
    /// Returns the displayable categories in chart and legend order.
    ///
    /// [`Self::Uncategorized`] is intentionally absent.
    #[must_use]
    pub const fn display_order() -> &'static [Self] {
        &[
            Self::Petty,
            Self::Serious,
            Self::Heinous,
            Self::Ccl,
            Self::Cncp,
        ]
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Petty,
            Self::Serious,
            Self::Heinous,
            Self::Ccl,
            Self::Cncp,
            Self::Uncategorized,
        ]
    }

    /// Whether this category appears in charts and the map legend.
    #[must_use]
    pub const fn is_displayable(self) -> bool {
        !matches!(self, Self::Uncategorized)
    }

    /// Returns the chart color for this category, or `None` for
    /// [`Self::Uncategorized`].
    #[must_use]
    pub const fn chart_color(self) -> Option<&'static str> {
        match self {
            Self::Petty => Some("yellow"),
            Self::Serious => Some("orange"),
            Self::Heinous => Some("red"),
            Self::Ccl => Some("purple"),
            Self::Cncp => Some("green"),
            Self::Uncategorized => None,
        }
    }

    /// Returns the map marker style for this category.
    #[must_use]
    pub const fn marker_style(self) -> MarkerStyle {
        match self {
            Self::Petty => MarkerStyle::new("yellow", "rgba(255, 255, 0, 0.5)", 9),
            Self::Serious => MarkerStyle::new("orange", "rgba(255, 165, 0, 0.5)", 9),
            Self::Heinous => MarkerStyle::new("red", "rgba(255, 0, 0, 0.5)", 9),
            Self::Ccl => MarkerStyle::new("purple", "rgba(128, 0, 128, 0.5)", 8),
            Self::Cncp => MarkerStyle::new("green", "rgba(0, 128, 0, 0.5)", 8),
            Self::Uncategorized => MarkerStyle::DEFAULT,
        }
    }
}

/// Stroke, fill, and radius of a circle marker on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Outline color.
    pub stroke: &'static str,
    /// Fill color (usually translucent).
    pub fill: &'static str,
    /// Radius in pixels.
    pub radius: u8,
}

impl MarkerStyle {
    /// Style used for any category without an entry of its own.
    pub const DEFAULT: Self = Self::new("blue", "rgba(0, 0, 255, 0.5)", 9);

    const fn new(stroke: &'static str, fill: &'static str, radius: u8) -> Self {
        Self {
            stroke,
            fill,
            radius,
        }
    }
}

/// One row of the map legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// The category this row describes.
    pub category: CrimeCategory,
    /// Swatch color.
    pub color: &'static str,
}

/// Returns the legend rows in display order.
#[must_use]
pub fn legend() -> Vec<LegendEntry> {
    CrimeCategory::display_order()
        .iter()
        .filter_map(|&category| {
            category
                .chart_color()
                .map(|color| LegendEntry { category, color })
        })
        .collect()
}
