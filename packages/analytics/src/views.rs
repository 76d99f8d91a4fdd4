//! Aggregations over a filtered record set.
//!
//! Each function is pure and total: any slice, including an empty one,
//! produces a well-formed (possibly empty) result.

use std::collections::BTreeMap;

use crime_dash_analytics_models::{
    AGE_BUCKET_WIDTH, AgeBucket, CategoryCount, SummaryRow, TrendPoint, round_one_decimal,
};
use crime_dash_crime_models::CrimeCategory;
use crime_dash_source_models::CrimeRecord;

/// Counts records per category, including [`CrimeCategory::Uncategorized`].
#[must_use]
pub fn category_counts(records: &[CrimeRecord]) -> BTreeMap<CrimeCategory, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.category).or_insert(0) += 1;
    }
    counts
}

/// Category distribution in display order.
///
/// Categories with no records are omitted, and uncategorized records are
/// never shown.
#[must_use]
pub fn category_distribution(records: &[CrimeRecord]) -> Vec<CategoryCount> {
    let counts = category_counts(records);
    CrimeCategory::display_order()
        .iter()
        .filter_map(|category| {
            counts.get(category).map(|&count| CategoryCount {
                category: *category,
                count,
            })
        })
        .collect()
}

/// Incident counts per calendar year.
///
/// Years are ordered by their string label, which is numeric order for
/// four-digit years. Years without incidents are not filled in, and records
/// without a date are skipped.
#[must_use]
pub fn yearly_trend(records: &[CrimeRecord]) -> Vec<TrendPoint> {
    let mut years: BTreeMap<String, u64> = BTreeMap::new();
    for year in records.iter().filter_map(CrimeRecord::year) {
        *years.entry(year.to_string()).or_insert(0) += 1;
    }
    years
        .into_iter()
        .map(|(year, count)| TrendPoint { year, count })
        .collect()
}

/// Age histogram with five-year buckets, ascending.
///
/// The bucket for an age is `floor(age / 5) * 5`. Empty buckets are omitted,
/// and records without an age are skipped.
#[must_use]
pub fn age_histogram(records: &[CrimeRecord]) -> Vec<AgeBucket> {
    let mut buckets: BTreeMap<i32, u64> = BTreeMap::new();
    for age in records.iter().filter_map(|r| r.age) {
        let low = age.div_euclid(AGE_BUCKET_WIDTH) * AGE_BUCKET_WIDTH;
        *buckets.entry(low).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|(low, count)| AgeBucket { low, count })
        .collect()
}

#[derive(Default)]
struct SummaryAccumulator {
    count: u64,
    aged: u64,
    total_age: i64,
}

/// Per-category count, share, and mean age, in first-occurrence order.
///
/// An empty input yields no rows. Percentages and averages are guarded
/// against division by zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summary_stats(records: &[CrimeRecord]) -> Vec<SummaryRow> {
    let mut order: Vec<CrimeCategory> = Vec::new();
    let mut acc: BTreeMap<CrimeCategory, SummaryAccumulator> = BTreeMap::new();

    for record in records {
        let entry = acc.entry(record.category).or_insert_with(|| {
            order.push(record.category);
            SummaryAccumulator::default()
        });
        entry.count += 1;
        if let Some(age) = record.age {
            entry.aged += 1;
            entry.total_age += i64::from(age);
        }
    }

    let total = records.len() as f64;

    order
        .into_iter()
        .filter_map(|category| acc.get(&category).map(|a| (category, a)))
        .map(|(category, a)| {
            let percentage = if total > 0.0 {
                round_one_decimal(a.count as f64 / total * 100.0)
            } else {
                0.0
            };
            let average_age =
                (a.aged > 0).then(|| round_one_decimal(a.total_age as f64 / a.aged as f64));
            SummaryRow {
                category,
                count: a.count,
                percentage,
                average_age,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(date: &str, category: CrimeCategory, age: Option<i32>) -> CrimeRecord {
        CrimeRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            crime_type: category.to_string(),
            police_station: "Kengeri".to_string(),
            latitude: Some(12.9),
            longitude: Some(77.5),
            age,
            cncp_details: None,
            crime_descriptions: None,
            category,
        }
    }

    fn mixed() -> Vec<CrimeRecord> {
        vec![
            record("2021-03-01", CrimeCategory::Heinous, Some(31)),
            record("2019-06-01", CrimeCategory::Uncategorized, Some(9)),
            record("2021-08-01", CrimeCategory::Petty, Some(5)),
            record("2020-01-01", CrimeCategory::Heinous, Some(34)),
            record("2019-02-02", CrimeCategory::Petty, Some(6)),
            record("2019-02-02", CrimeCategory::Serious, None),
        ]
    }

    #[test]
    fn distribution_follows_display_order_and_hides_uncategorized() {
        let dist = category_distribution(&mixed());
        let cats: Vec<CrimeCategory> = dist.iter().map(|c| c.category).collect();
        assert_eq!(
            cats,
            [
                CrimeCategory::Petty,
                CrimeCategory::Serious,
                CrimeCategory::Heinous
            ]
        );
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[2].count, 2);
    }

    #[test]
    fn counts_including_uncategorized_sum_to_total() {
        let records = mixed();
        let counts = category_counts(&records);
        assert_eq!(counts.values().sum::<u64>(), records.len() as u64);
        assert_eq!(counts.get(&CrimeCategory::Uncategorized), Some(&1));
    }

    #[test]
    fn trend_is_sorted_without_gaps_filled() {
        let trend = yearly_trend(&mixed());
        assert_eq!(
            trend,
            [
                TrendPoint {
                    year: "2019".to_string(),
                    count: 3
                },
                TrendPoint {
                    year: "2020".to_string(),
                    count: 1
                },
                TrendPoint {
                    year: "2021".to_string(),
                    count: 2
                },
            ]
        );

        let sparse = vec![
            record("2023-01-01", CrimeCategory::Petty, Some(20)),
            record("2017-01-01", CrimeCategory::Petty, Some(20)),
        ];
        let years: Vec<String> = yearly_trend(&sparse).into_iter().map(|p| p.year).collect();
        assert_eq!(years, ["2017", "2023"]);
    }

    #[test]
    fn trend_skips_unknown_dates() {
        let records = vec![record("??", CrimeCategory::Petty, Some(20))];
        assert!(yearly_trend(&records).is_empty());
    }

    #[test]
    fn age_bucket_five_to_nine_holds_exactly_those_ages() {
        let records: Vec<CrimeRecord> = (3..=11)
            .map(|age| record("2020-01-01", CrimeCategory::Petty, Some(age)))
            .collect();
        let hist = age_histogram(&records);
        let bucket = hist.iter().find(|b| b.low == 5).unwrap();
        assert_eq!(bucket.count, 5);
        assert_eq!(bucket.label(), "5-9");
        let lows: Vec<i32> = hist.iter().map(|b| b.low).collect();
        assert_eq!(lows, [0, 5, 10]);
    }

    #[test]
    fn histogram_omits_empty_buckets_and_unknown_ages() {
        let hist = age_histogram(&mixed());
        let labels: Vec<String> = hist.iter().map(AgeBucket::label).collect();
        assert_eq!(labels, ["5-9", "30-34"]);
        assert_eq!(hist[0].count, 3);
        assert_eq!(hist[1].count, 2);
    }

    #[test]
    fn histogram_sorts_numerically() {
        let records = vec![
            record("2020-01-01", CrimeCategory::Petty, Some(100)),
            record("2020-01-01", CrimeCategory::Petty, Some(20)),
            record("2020-01-01", CrimeCategory::Petty, Some(-2)),
        ];
        let lows: Vec<i32> = age_histogram(&records).iter().map(|b| b.low).collect();
        assert_eq!(lows, [-5, 20, 100]);
    }

    #[test]
    fn summary_rows_in_first_occurrence_order() {
        let rows = summary_stats(&mixed());
        let cats: Vec<CrimeCategory> = rows.iter().map(|r| r.category).collect();
        assert_eq!(
            cats,
            [
                CrimeCategory::Heinous,
                CrimeCategory::Uncategorized,
                CrimeCategory::Petty,
                CrimeCategory::Serious
            ]
        );

        let heinous = &rows[0];
        assert_eq!(heinous.count, 2);
        assert!((heinous.percentage - 33.3).abs() < 1e-9);
        assert!((heinous.average_age.unwrap() - 32.5).abs() < 1e-9);

        let serious = &rows[3];
        assert_eq!(serious.average_age, None);
        assert!((serious.percentage - 16.7).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_empty_views() {
        assert!(category_counts(&[]).is_empty());
        assert!(category_distribution(&[]).is_empty());
        assert!(yearly_trend(&[]).is_empty());
        assert!(age_histogram(&[]).is_empty());
        assert!(summary_stats(&[]).is_empty());
    }
}
