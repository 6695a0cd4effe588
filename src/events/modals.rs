//! Key handling for the lightweight overlays (Help, NotFound).

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};
use crate::theme::chord_matches;

/// What: Handle a key while a lightweight overlay is open.
///
/// Output:
/// - `true` when the key was consumed by an overlay; `false` when no
///   overlay other than Compare is active.
pub fn handle_modal_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match app.modal {
        Modal::Help => {
            if chord_matches(&app.keymap.help_overlay, &ke) {
                app.modal = Modal::None;
                return true;
            }
            match ke.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.modal = Modal::None,
                KeyCode::Up => app.help_scroll = app.help_scroll.saturating_sub(1),
                KeyCode::Down => app.help_scroll = app.help_scroll.saturating_add(1),
                _ => {}
            }
            true
        }
        Modal::NotFound { .. } => {
            if matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                app.modal = Modal::None;
            }
            true
        }
        Modal::None | Modal::Compare => false,
    }
}
