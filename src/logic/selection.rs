//! Results-list selection movement and the viewed-record hook.

use crate::state::AppState;

/// What: Move the results selection by a signed delta, clamped to the list.
///
/// Details:
/// - Resets the details-pane scroll so a new record starts at the top.
/// - An empty results list clears the selection entirely.
pub fn move_sel(app: &mut AppState, delta: isize) {
    if app.results.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
        return;
    }
    let len = app.results.len() as isize;
    let next = (app.selected as isize + delta).clamp(0, len - 1);
    if next as usize != app.selected {
        app.details_scroll = 0;
    }
    app.selected = next as usize;
    app.list_state.select(Some(app.selected));
}

/// Jump the selection straight to an index (used by lineup/related shortcuts).
pub fn select_index(app: &mut AppState, index: usize) {
    if app.results.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
        return;
    }
    let clamped = index.min(app.results.len() - 1);
    if clamped != app.selected {
        app.details_scroll = 0;
    }
    app.selected = clamped;
    app.list_state.select(Some(clamped));
}

/// What: After the results list was rebuilt, restore the selection to the
/// record with the given id, or to the top when it is gone.
pub(crate) fn restore_selection(app: &mut AppState, keep: Option<String>) {
    if app.results.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
        return;
    }
    let idx = keep
        .and_then(|id| app.results.iter().position(|c| c.id == id))
        .unwrap_or(0);
    app.selected = idx;
    app.list_state.select(Some(idx));
}

/// What: Append the highlighted record to the viewed audit log, once per
/// dwell (repeated calls while the selection rests on one record are no-ops).
///
/// Details:
/// - Called from the app loop after each handled event, not from `move_sel`,
///   so pure selection logic stays free of I/O.
pub fn note_viewed(app: &mut AppState) {
    let Some(car) = app.selected_car() else {
        return;
    };
    if app.viewed_logged_for.as_deref() == Some(car.id.as_str()) {
        return;
    }
    let id = car.id.clone();
    // Logging is best-effort; a read-only config dir must not break browsing.
    let _ = super::viewed::log_viewed(&id);
    app.viewed_logged_for = Some(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::car;

    fn app_with_results(n: u16) -> AppState {
        AppState {
            results: (0..n)
                .map(|i| car(&format!("r{i}"), "Kia", "K5", 2020 + i, "Sedan"))
                .collect(),
            ..AppState::default()
        }
    }

    #[test]
    /// What: Movement clamps at both ends and tracks the list state.
    fn move_sel_clamps_and_syncs_list_state() {
        let mut app = app_with_results(3);
        move_sel(&mut app, -1);
        assert_eq!(app.selected, 0);
        move_sel(&mut app, 2);
        assert_eq!(app.selected, 2);
        move_sel(&mut app, 5);
        assert_eq!(app.selected, 2);
        assert_eq!(app.list_state.selected(), Some(2));

        let mut empty = app_with_results(0);
        move_sel(&mut empty, 1);
        assert_eq!(empty.selected, 0);
        assert_eq!(empty.list_state.selected(), None);
    }

    #[test]
    /// What: Moving to a different record resets the details scroll; staying
    /// put keeps it.
    fn move_sel_resets_details_scroll_on_change() {
        let mut app = app_with_results(2);
        app.details_scroll = 7;
        move_sel(&mut app, 0);
        assert_eq!(app.details_scroll, 7);
        move_sel(&mut app, 1);
        assert_eq!(app.details_scroll, 0);
    }

    #[test]
    /// What: Direct index selection clamps to the list bounds.
    fn select_index_clamps() {
        let mut app = app_with_results(2);
        select_index(&mut app, 9);
        assert_eq!(app.selected, 1);
        select_index(&mut app, 0);
        assert_eq!(app.selected, 0);
    }
}
