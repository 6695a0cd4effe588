//! Key handling for the Search pane: a single-line editable query input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, Focus};

/// What: Edit the search input and keep the filter spec in sync.
///
/// Details:
/// - Every edit re-runs the catalog query immediately; the dataset is small
///   enough that there is nothing to debounce.
/// - Enter or Down hands focus to the Results pane; Esc clears the query.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char(c)
            if !ke.modifiers.contains(KeyModifiers::CONTROL)
                && !ke.modifiers.contains(KeyModifiers::ALT) =>
        {
            let byte = byte_index(&app.input, app.search_caret);
            app.input.insert(byte, c);
            app.search_caret += 1;
            sync_query(app);
        }
        KeyCode::Backspace => {
            if app.search_caret > 0 {
                let byte = byte_index(&app.input, app.search_caret - 1);
                app.input.remove(byte);
                app.search_caret -= 1;
                sync_query(app);
            }
        }
        KeyCode::Delete => {
            if app.search_caret < app.input.chars().count() {
                let byte = byte_index(&app.input, app.search_caret);
                app.input.remove(byte);
                sync_query(app);
            }
        }
        KeyCode::Left => app.search_caret = app.search_caret.saturating_sub(1),
        KeyCode::Right => {
            app.search_caret = (app.search_caret + 1).min(app.input.chars().count());
        }
        KeyCode::Home => app.search_caret = 0,
        KeyCode::End => app.search_caret = app.input.chars().count(),
        KeyCode::Esc => {
            if !app.input.is_empty() {
                app.input.clear();
                app.search_caret = 0;
                sync_query(app);
            }
        }
        KeyCode::Enter | KeyCode::Down => app.focus = Focus::Results,
        _ => {}
    }
    false
}

/// Byte offset of the given character position (caret positions are
/// character-based; `String` editing is byte-based).
fn byte_index(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Mirror the input into the filter spec and recompute results.
fn sync_query(app: &mut AppState) {
    app.filters.search_query = app.input.clone();
    crate::logic::apply_filters_preserve_selection(app);
}
