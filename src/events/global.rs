//! Shortcuts that work regardless of which pane is focused.

use crossterm::event::KeyEvent;

use crate::state::{AppState, Modal};
use crate::theme::chord_matches;

/// What: Handle a global shortcut if the key matches one.
///
/// Output:
/// - `Some(true)` to exit, `Some(false)` when the key was consumed by a
///   global action, `None` when the key should fall through to the focused
///   pane.
pub fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> Option<bool> {
    if chord_matches(&app.keymap.exit, &ke) {
        return Some(true);
    }
    if chord_matches(&app.keymap.help_overlay, &ke) {
        app.help_scroll = 0;
        app.modal = Modal::Help;
        return Some(false);
    }
    if chord_matches(&app.keymap.pane_next, &ke) {
        app.focus = app.focus.next(app.show_filters_pane);
        return Some(false);
    }
    if chord_matches(&app.keymap.change_sort, &ke) {
        cycle_sort(app);
        return Some(false);
    }
    if chord_matches(&app.keymap.reload_theme, &ke) {
        crate::theme::reload_theme();
        return Some(false);
    }
    if chord_matches(&app.keymap.compare_view, &ke) {
        app.compare_selected = 0;
        app.modal = Modal::Compare;
        return Some(false);
    }
    if chord_matches(&app.keymap.reset_filters, &ke) {
        super::filters::reset_filters(app);
        return Some(false);
    }
    None
}

/// Advance to the next sort mode, re-sort in place, and persist the choice.
pub(super) fn cycle_sort(app: &mut AppState) {
    app.sort_mode = app.sort_mode.next();
    crate::logic::sort_results_preserve_selection(app);
    crate::theme::save_sort_mode(app.sort_mode);
}
