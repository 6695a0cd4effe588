//! The comparison set: a bounded, ordered, deduplicated selection of records
//! chosen for side-by-side comparison.
//!
//! The list is owned by [`crate::state::AppState`] and mutated only through
//! the operations here, so every change is atomic with respect to the UI
//! event that triggered it.

use crate::state::CarRecord;

/// Maximum number of records that can be compared at once.
pub const COMPARE_CAPACITY: usize = 3;

/// What: Session-scoped selection of up to [`COMPARE_CAPACITY`] records,
/// stored by id in insertion order.
///
/// Details:
/// - Duplicates are rejected, order is oldest-added first, and the set never
///   outlives the process. Members are resolved back to full records on read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareList {
    ids: Vec<String>,
}

impl CompareList {
    /// What: Add a record to the comparison set.
    ///
    /// Inputs:
    /// - `car`: Record to add (only its id is stored).
    ///
    /// Output:
    /// - `true` when the set changed; `false` when the record was already
    ///   present or the set is at capacity. Callers use the result to drive
    ///   UI affordances, not error reporting.
    pub fn add(&mut self, car: &CarRecord) -> bool {
        if self.ids.len() >= COMPARE_CAPACITY || self.contains(&car.id) {
            return false;
        }
        self.ids.push(car.id.clone());
        true
    }

    /// Remove the entry with the given id. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|i| i != id);
    }

    /// Empty the set unconditionally.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether the given id is currently selected for comparison.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether another distinct record would be rejected.
    pub fn is_full(&self) -> bool {
        self.ids.len() >= COMPARE_CAPACITY
    }

    /// What: Resolve the stored ids back to full records.
    ///
    /// Inputs:
    /// - `records`: The catalog to resolve against.
    ///
    /// Output:
    /// - Members in insertion order. Ids that no longer resolve are silently
    ///   dropped from the view (cannot happen with the immutable bundled
    ///   dataset, but the lookup is defensive anyway).
    pub fn members<'a>(&self, records: &'a [CarRecord]) -> Vec<&'a CarRecord> {
        self.ids
            .iter()
            .filter_map(|id| records.iter().find(|c| &c.id == id))
            .collect()
    }

    /// Stored ids, oldest-added first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::car;

    fn dataset() -> Vec<CarRecord> {
        vec![
            car("a1", "Hyundai", "Sonata", 2023, "Sedan"),
            car("a2", "Hyundai", "Sonata", 2020, "Sedan"),
            car("b1", "Kia", "K5", 2023, "Sedan"),
            car("c1", "Genesis", "G80", 2021, "Sedan"),
        ]
    }

    #[test]
    /// What: Walk the documented add/remove/clear scenario end to end.
    ///
    /// Inputs:
    /// - Four distinct records added in sequence against a capacity of three.
    ///
    /// Output:
    /// - The fourth add is a rejected no-op, removal drops exactly one entry
    ///   while preserving order, and clear empties the set.
    fn add_remove_clear_scenario() {
        let records = dataset();
        let mut list = CompareList::default();
        assert!(list.is_empty());

        assert!(list.add(&records[0]));
        assert!(list.add(&records[1]));
        assert!(list.add(&records[2]));
        assert!(list.is_full());
        assert_eq!(
            list.members(&records).iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            ["a1", "a2", "b1"]
        );

        // Fourth distinct record: rejected, members unchanged.
        assert!(!list.add(&records[3]));
        assert_eq!(list.len(), 3);
        assert_eq!(
            list.members(&records).iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            ["a1", "a2", "b1"]
        );

        list.remove("a2");
        assert!(!list.contains("a2"));
        assert_eq!(
            list.members(&records).iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            ["a1", "b1"]
        );

        list.clear();
        assert!(list.members(&records).is_empty());
    }

    #[test]
    /// What: Duplicate adds neither grow nor reorder the set.
    fn duplicate_add_is_a_noop() {
        let records = dataset();
        let mut list = CompareList::default();
        assert!(list.add(&records[0]));
        assert!(list.add(&records[2]));
        assert!(!list.add(&records[0]));
        assert_eq!(list.ids(), ["a1", "b1"]);
    }

    #[test]
    /// What: `add` then `contains` holds; `remove` then `contains` does not.
    fn contains_tracks_membership() {
        let records = dataset();
        let mut list = CompareList::default();
        assert!(!list.contains("a1"));
        list.add(&records[0]);
        assert!(list.contains("a1"));
        list.remove("a1");
        assert!(!list.contains("a1"));
        // Removing an absent id stays a no-op.
        list.remove("a1");
        assert!(list.is_empty());
    }

    #[test]
    /// What: Ids that no longer resolve are dropped from the member view
    /// without disturbing the rest.
    fn members_drops_unresolvable_ids() {
        let mut records = dataset();
        let mut list = CompareList::default();
        list.add(&records[0]);
        list.add(&records[1]);
        records.remove(1); // a2 vanishes from the catalog
        assert_eq!(
            list.members(&records).iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            ["a1"]
        );
        // The stored id itself is untouched; only the view filters it.
        assert_eq!(list.ids(), ["a1", "a2"]);
    }
}
