//! Key handling for the Results pane: list navigation, comparison toggling,
//! and the pane-local shortcuts that shadow global chords with single keys.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{move_sel, selection::select_index};
use crate::state::{AppState, Focus, Modal};

/// Page size for PageUp/PageDown list jumps.
const PAGE_JUMP: isize = 10;

/// What: Navigate results and mutate the comparison set.
///
/// Details:
/// - Space or Enter toggle comparison membership for the highlighted record,
///   matching the detail view's add/remove button; at capacity the add side
///   is a silent no-op surfaced only through the `3/3` badge.
/// - `[`/`]` scroll the details pane for long spec sheets.
pub fn handle_results_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Up => move_sel(app, -1),
        KeyCode::Down => move_sel(app, 1),
        KeyCode::PageUp => move_sel(app, -PAGE_JUMP),
        KeyCode::PageDown => move_sel(app, PAGE_JUMP),
        KeyCode::Home => select_index(app, 0),
        KeyCode::End => select_index(app, app.results.len().saturating_sub(1)),
        KeyCode::Char(' ') | KeyCode::Enter => toggle_compare(app),
        KeyCode::Char('c') => {
            app.compare_selected = 0;
            app.modal = Modal::Compare;
        }
        KeyCode::Char('s') => super::global::cycle_sort(app),
        KeyCode::Char('r') => super::filters::reset_filters(app),
        KeyCode::Char('f') => {
            app.show_filters_pane = !app.show_filters_pane;
            crate::theme::save_show_filters_pane(app.show_filters_pane);
        }
        KeyCode::Char('k') => {
            app.show_keybinds_footer = !app.show_keybinds_footer;
            crate::theme::save_show_keybinds_footer(app.show_keybinds_footer);
        }
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('[') => app.details_scroll = app.details_scroll.saturating_sub(1),
        KeyCode::Char(']') => app.details_scroll = app.details_scroll.saturating_add(1),
        KeyCode::Char('q') => return true,
        KeyCode::Esc => app.focus = Focus::Search,
        _ => {}
    }
    false
}

/// Add the highlighted record to the comparison set, or remove it when it is
/// already a member.
fn toggle_compare(app: &mut AppState) {
    let Some(car) = app.selected_car().cloned() else {
        return;
    };
    if app.compare.contains(&car.id) {
        app.compare.remove(&car.id);
    } else {
        // Capacity rejection is deliberate and silent.
        let _ = app.compare.add(&car);
    }
}
