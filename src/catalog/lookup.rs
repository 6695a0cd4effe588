//! Single-record resolution and the derived record sets the details pane
//! renders: the model lineup and related records.

use crate::state::CarRecord;

/// What: Resolve a record by id.
///
/// Output:
/// - `Some` on a hit; `None` for an unknown id. An unknown id is a normal,
///   expected outcome (stale bookmark, mistyped CLI argument) that consumers
///   render as a not-found view, never a fault.
pub fn find_by_id<'a>(records: &'a [CarRecord], id: &str) -> Option<&'a CarRecord> {
    records.iter().find(|c| c.id == id)
}

/// What: The model lineup for a record - every entry sharing its manufacturer
/// and model, newest year first.
///
/// Details:
/// - The given record itself is part of its own lineup. Ties on year keep
///   dataset order (the sort is stable).
pub fn lineup_for(records: &[CarRecord], car: &CarRecord) -> Vec<CarRecord> {
    let mut lineup: Vec<CarRecord> = records
        .iter()
        .filter(|c| c.manufacturer == car.manufacturer && c.model == car.model)
        .cloned()
        .collect();
    lineup.sort_by(|a, b| b.year.cmp(&a.year));
    lineup
}

/// What: Records related to the given one by shared manufacturer or category.
///
/// Inputs:
/// - `limit`: Maximum number of records to return (the UI passes 3).
///
/// Output:
/// - Matches in dataset order, the given record excluded. First-match order
///   is the contract; there is deliberately no relevance ranking.
pub fn related_to(records: &[CarRecord], car: &CarRecord, limit: usize) -> Vec<CarRecord> {
    records
        .iter()
        .filter(|c| c.id != car.id && (c.manufacturer == car.manufacturer || c.category == car.category))
        .take(limit)
        .cloned()
        .collect()
}
