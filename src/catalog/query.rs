//! The catalog query engine: stable filtering plus facet derivation for the
//! filter controls. Everything here is a pure function over the record slice
//! it is given; nothing caches or mutates.

use crate::state::{CarRecord, FilterSpec};

/// What: Produce the records matching a filter spec.
///
/// Inputs:
/// - `records`: Catalog slice to filter (usually [`crate::catalog::all`]).
/// - `spec`: The active filter criteria.
///
/// Output:
/// - Matching records in input order. The filter is stable and applies no
///   sort of its own; ordering beyond dataset order is the caller's call.
///
/// Details:
/// - A spec with `min_year > max_year` matches nothing, which is a legal
///   zero-result query rather than an error.
pub fn query(records: &[CarRecord], spec: &FilterSpec) -> Vec<CarRecord> {
    records.iter().filter(|c| spec.matches(c)).cloned().collect()
}

/// Distinct manufacturers, sorted lexicographically for the filter dropdown.
pub fn manufacturers(records: &[CarRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for car in records {
        if !out.contains(&car.manufacturer) {
            out.push(car.manufacturer.clone());
        }
    }
    out.sort();
    out
}

/// Distinct categories in first-seen (dataset) order.
pub fn categories(records: &[CarRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for car in records {
        if !out.contains(&car.category) {
            out.push(car.category.clone());
        }
    }
    out
}

/// Distinct model years, newest first.
pub fn years(records: &[CarRecord]) -> Vec<u16> {
    let mut out: Vec<u16> = Vec::new();
    for car in records {
        if !out.contains(&car.year) {
            out.push(car.year);
        }
    }
    out.sort_unstable_by(|a, b| b.cmp(a));
    out
}
