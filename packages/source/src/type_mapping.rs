//! Crime type to category mapping.
//!
//! Assigns a [`CrimeCategory`] from the free-text `crime_type` column. The
//! match is exact after lowercasing: only `petty`, `serious`, and `heinous`
//! are recognized. The `ccl` and `cncp` categories exist for filtering and
//! charting but are never produced here.

use crime_dash_crime_models::CrimeCategory;

/// Maps a raw crime type string to its category.
///
/// Case-insensitive, no trimming, no keyword search. Returns
/// [`CrimeCategory::Uncategorized`] for anything else.
#[must_use]
pub fn map_crime_type(raw: &str) -> CrimeCategory {
    match raw.to_lowercase().as_str() {
        "petty" => CrimeCategory::Petty,
        "serious" => CrimeCategory::Serious,
        "heinous" => CrimeCategory::Heinous,
        _ => CrimeCategory::Uncategorized,
    }
}
