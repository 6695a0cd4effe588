//! Recomputing the results list when the filter spec changes.

use crate::state::AppState;

/// What: Re-run the catalog query for the current [`crate::state::FilterSpec`]
/// and re-apply the active sort, keeping the highlighted record highlighted
/// when it survives the new filter.
///
/// Details:
/// - Runs synchronously within the event dispatch that changed the spec; the
///   catalog is resident and small, so there is no debounce or worker here.
/// - A record that falls out of the results moves the selection to the top.
pub fn apply_filters_preserve_selection(app: &mut AppState) {
    let keep = app.selected_car().map(|c| c.id.clone());
    let mut results = crate::catalog::query(crate::catalog::all(), &app.filters);
    super::sort::sort_records(&mut results, app.sort_mode);
    app.results = results;
    super::selection::restore_selection(app, keep);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FilterSpec;

    #[test]
    /// What: Filtering against the bundled catalog narrows results, keeps the
    /// highlighted record when it still matches, and resets the selection
    /// when it does not.
    ///
    /// Inputs:
    /// - The embedded dataset, filtered to the highlighted record's
    ///   manufacturer, then to a different one.
    fn filtering_tracks_the_highlighted_record() {
        let records = crate::catalog::all();
        assert!(!records.is_empty());

        let mut app = AppState::default();
        apply_filters_preserve_selection(&mut app);
        assert_eq!(app.results.len(), records.len());

        // Highlight the last record, then filter to its manufacturer.
        app.selected = app.results.len() - 1;
        let target = app.results[app.selected].clone();
        app.filters = FilterSpec {
            manufacturer: target.manufacturer.clone(),
            ..FilterSpec::default()
        };
        apply_filters_preserve_selection(&mut app);
        assert!(app.results.iter().all(|c| c.manufacturer == target.manufacturer));
        assert_eq!(app.results[app.selected].id, target.id);

        // A filter that excludes the highlighted record resets to the top.
        let other = records
            .iter()
            .find(|c| c.manufacturer != target.manufacturer)
            .expect("dataset spans manufacturers");
        app.filters = FilterSpec {
            manufacturer: other.manufacturer.clone(),
            ..FilterSpec::default()
        };
        apply_filters_preserve_selection(&mut app);
        assert_eq!(app.selected, 0);
        assert!(app.results.iter().all(|c| c.manufacturer == other.manufacturer));
    }

    #[test]
    /// What: An impossible year range empties the results and clears the
    /// list selection without erroring.
    fn impossible_bounds_clear_results() {
        let mut app = AppState::default();
        app.filters.min_year = 3000;
        app.filters.max_year = 2000;
        apply_filters_preserve_selection(&mut app);
        assert!(app.results.is_empty());
        assert_eq!(app.selected, 0);
        assert_eq!(app.list_state.selected(), None);
        assert!(app.selected_car().is_none());
    }
}
