//! Recompute-on-change dashboard session.
//!
//! This is the entry point for interactive front ends that embed the
//! pipeline: hold one [`Dashboard`], feed it every control change, and
//! render the returned [`Snapshot`]. The CLI drives it for one-shot
//! reports; the HTTP server is stateless per request and filters and
//! aggregates directly.
//!
//! The dataset is read-only once established. Every filter change builds a
//! brand new [`Snapshot`]; earlier snapshots are never mutated, so a
//! consumer still holding one sees a consistent (if stale) view. The most
//! recent change always wins.

use std::sync::Arc;

use crime_dash_analytics_models::DerivedViews;
use crime_dash_query::{filter_records, station_options};
use crime_dash_query_models::FilterState;
use crime_dash_source_models::CrimeRecord;
use serde::Serialize;

use crate::aggregate;

/// Filtered records and their views for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Increments on every recompute.
    pub generation: u64,
    /// The filter this snapshot was computed for.
    pub filter: FilterState,
    /// Records passing the filter, in dataset order.
    pub records: Vec<CrimeRecord>,
    /// Views derived from `records`.
    pub views: DerivedViews,
}

/// Holds the working dataset, the current filter, and the latest snapshot.
#[derive(Debug)]
pub struct Dashboard {
    dataset: Arc<[CrimeRecord]>,
    filter: FilterState,
    current: Arc<Snapshot>,
}

impl Dashboard {
    /// Creates a session over a validated dataset with the default filter.
    #[must_use]
    pub fn new(dataset: Arc<[CrimeRecord]>) -> Self {
        let filter = FilterState::default();
        let current = Arc::new(compute(&dataset, &filter, 0));
        Self {
            dataset,
            filter,
            current,
        }
    }

    /// The full working dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Arc<[CrimeRecord]> {
        &self.dataset
    }

    /// The filter the current snapshot was computed for.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The most recent snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    /// Station selector options for the current dataset.
    #[must_use]
    pub fn stations(&self) -> Vec<String> {
        station_options(&self.dataset)
    }

    /// Replaces the filter and recomputes.
    pub fn set_filter(&mut self, filter: FilterState) -> Arc<Snapshot> {
        self.filter = filter;
        self.recompute()
    }

    /// Edits the current filter in place and recomputes.
    pub fn update_filter(&mut self, edit: impl FnOnce(&mut FilterState)) -> Arc<Snapshot> {
        edit(&mut self.filter);
        self.recompute()
    }

    /// Swaps in a new source dataset and recomputes with the current filter.
    pub fn replace_dataset(&mut self, dataset: Arc<[CrimeRecord]>) -> Arc<Snapshot> {
        self.dataset = dataset;
        self.recompute()
    }

    fn recompute(&mut self) -> Arc<Snapshot> {
        let generation = self.current.generation + 1;
        self.current = Arc::new(compute(&self.dataset, &self.filter, generation));
        log::debug!(
            "Snapshot {generation}: {} of {} records",
            self.current.records.len(),
            self.dataset.len()
        );
        self.snapshot()
    }
}

fn compute(dataset: &[CrimeRecord], filter: &FilterState, generation: u64) -> Snapshot {
    let records = filter_records(dataset, filter);
    let views = aggregate(&records);
    Snapshot {
        generation,
        filter: filter.clone(),
        records,
        views,
    }
}
