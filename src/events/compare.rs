//! Key handling for the Compare overlay.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};
use crate::theme::chord_matches;

/// What: Navigate the comparison columns, remove members, or close the
/// overlay.
///
/// Details:
/// - `x`/Delete/Backspace remove the highlighted column; Shift+C clears the
///   whole set. The overlay stays open on an empty set to show its hint
///   text, matching the compare page's empty state.
pub fn handle_compare_key(ke: KeyEvent, app: &mut AppState) -> bool {
    // The open chord also closes, so the overlay feels like a toggle.
    if chord_matches(&app.keymap.compare_view, &ke) {
        app.modal = Modal::None;
        return false;
    }
    if chord_matches(&app.keymap.exit, &ke) {
        return true;
    }
    match ke.code {
        KeyCode::Esc | KeyCode::Char('q') => app.modal = Modal::None,
        KeyCode::Left => app.compare_selected = app.compare_selected.saturating_sub(1),
        KeyCode::Right => {
            let last = app.compare.len().saturating_sub(1);
            app.compare_selected = (app.compare_selected + 1).min(last);
        }
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
            let Some(id) = app.compare.ids().get(app.compare_selected).cloned() else {
                return false;
            };
            app.compare.remove(&id);
            let last = app.compare.len().saturating_sub(1);
            app.compare_selected = app.compare_selected.min(last);
        }
        KeyCode::Char('C') => {
            app.compare.clear();
            app.compare_selected = 0;
        }
        _ => {}
    }
    false
}
