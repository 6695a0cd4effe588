//! Key handling for the Filters pane: four rows whose values cycle through
//! the catalog facets.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, FilterField, FilterSpec, Focus, YEAR_MAX, YEAR_MIN};

/// What: Navigate filter rows and cycle their values.
///
/// Details:
/// - Up/Down select a row; Left/Right step the row's value through
///   `Any` plus the facet values derived from the catalog. Every change
///   recomputes results immediately.
pub fn handle_filters_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Up => app.filter_row = app.filter_row.saturating_sub(1),
        KeyCode::Down => {
            app.filter_row = (app.filter_row + 1).min(FilterField::ALL.len() - 1);
        }
        KeyCode::Left => cycle_current_row(app, -1),
        KeyCode::Right | KeyCode::Enter => cycle_current_row(app, 1),
        KeyCode::Char('r') => reset_filters(app),
        KeyCode::Char('q') => return true,
        KeyCode::Esc => app.focus = Focus::Search,
        _ => {}
    }
    false
}

/// Step the highlighted row's value and re-filter.
fn cycle_current_row(app: &mut AppState, dir: isize) {
    let records = crate::catalog::all();
    match FilterField::ALL[app.filter_row] {
        FilterField::Manufacturer => {
            let options = crate::catalog::manufacturers(records);
            app.filters.manufacturer = cycle_string(&options, &app.filters.manufacturer, dir);
        }
        FilterField::Category => {
            let options = crate::catalog::categories(records);
            app.filters.category = cycle_string(&options, &app.filters.category, dir);
        }
        FilterField::MinYear => {
            let options = crate::catalog::years(records);
            app.filters.min_year = cycle_year(&options, app.filters.min_year, YEAR_MIN, dir);
        }
        FilterField::MaxYear => {
            let options = crate::catalog::years(records);
            app.filters.max_year = cycle_year(&options, app.filters.max_year, YEAR_MAX, dir);
        }
    }
    crate::logic::apply_filters_preserve_selection(app);
}

/// What: Reset every facet filter to "any", keeping the search query (the
/// search box is its own control, not part of the filter panel).
pub(super) fn reset_filters(app: &mut AppState) {
    app.filters = FilterSpec {
        search_query: app.filters.search_query.clone(),
        ..FilterSpec::default()
    };
    crate::logic::apply_filters_preserve_selection(app);
}

/// Cycle through `Any` (empty) followed by the facet values, wrapping in
/// both directions. A current value missing from the facet list counts as
/// `Any` (can happen only if the catalog changed under a stale spec).
fn cycle_string(options: &[String], current: &str, dir: isize) -> String {
    if options.is_empty() {
        return String::new();
    }
    let len = options.len() as isize;
    let cur = if current.is_empty() {
        0
    } else {
        options
            .iter()
            .position(|o| o == current)
            .map(|p| p as isize + 1)
            .unwrap_or(0)
    };
    let next = (cur + dir).rem_euclid(len + 1);
    if next == 0 {
        String::new()
    } else {
        options[(next - 1) as usize].clone()
    }
}

/// Same cycle over the year facet, with the row's "no bound" default in the
/// `Any` slot.
fn cycle_year(options: &[u16], current: u16, default: u16, dir: isize) -> u16 {
    if options.is_empty() {
        return default;
    }
    let len = options.len() as isize;
    let cur = if current == default {
        0
    } else {
        options
            .iter()
            .position(|y| *y == current)
            .map(|p| p as isize + 1)
            .unwrap_or(0)
    };
    let next = (cur + dir).rem_euclid(len + 1);
    if next == 0 {
        default
    } else {
        options[(next - 1) as usize]
    }
}
