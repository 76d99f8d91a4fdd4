//! Plain-text rendering of the derived views.

use std::fmt::Write as _;

use crime_dash_analytics_models::DerivedViews;
use crime_dash_query_models::FilterState;

/// Renders the filter and every view as an aligned text report.
pub fn render(filter: &FilterState, views: &DerivedViews) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "Filter: category={} station={} dates={}..={} ages={}..={}",
        filter.category,
        filter.station,
        filter.start_date,
        filter.end_date,
        filter.min_age,
        filter.max_age
    )
    .unwrap();
    writeln!(out, "Incidents: {}", views.total).unwrap();

    if views.is_empty() {
        writeln!(out, "\nNo incidents match the filter.").unwrap();
        return out;
    }

    writeln!(out, "\n{:<16} {:>7}", "CATEGORY", "COUNT").unwrap();
    for entry in &views.categories {
        writeln!(out, "{:<16} {:>7}", entry.category.to_string(), entry.count).unwrap();
    }

    writeln!(out, "\n{:<8} {:>7}", "YEAR", "COUNT").unwrap();
    for point in &views.trend {
        writeln!(out, "{:<8} {:>7}", point.year, point.count).unwrap();
    }

    writeln!(out, "\n{:<8} {:>7}", "AGES", "COUNT").unwrap();
    for bucket in &views.ages {
        writeln!(out, "{:<8} {:>7}", bucket.label(), bucket.count).unwrap();
    }

    writeln!(
        out,
        "\n{:<16} {:>7} {:>8} {:>8}",
        "SUMMARY", "COUNT", "PERCENT", "AVG AGE"
    )
    .unwrap();
    for row in &views.summary {
        writeln!(
            out,
            "{:<16} {:>7} {:>8} {:>8}",
            row.category.to_string(),
            row.count,
            row.percentage_label(),
            row.average_age_label()
        )
        .unwrap();
    }

    out
}
