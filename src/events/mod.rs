//! Event handling layer for Carsea's TUI.
//!
//! This module exposes `handle_event` and delegates pane-specific logic to
//! submodules to keep files small and maintainable. Every mutation completes
//! before `handle_event` returns, so a redraw never observes a half-applied
//! change.

use crossterm::event::{Event as CEvent, KeyEventKind};

use crate::state::{AppState, Focus, Modal};

mod compare;
mod filters;
mod global;
mod modals;
mod results;
mod search;

/// What: Dispatch a single terminal key event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event (only key presses are acted on)
/// - `app`: Mutable application state
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Handles the active overlay first (Compare/Help/NotFound), then global
///   shortcuts (help, exit, pane cycling, sort, theme reload, compare view,
///   filter reset), then delegates pane-specific handling to the `search`,
///   `filters`, and `results` submodules.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    if let CEvent::Key(ke) = ev {
        if ke.kind != KeyEventKind::Press {
            return false;
        }

        // Handle the Compare overlay first (it's the largest)
        if matches!(app.modal, Modal::Compare) {
            return compare::handle_compare_key(ke, app);
        }

        // Handle all other overlays
        if modals::handle_modal_key(ke, app) {
            return false;
        }

        // If any overlay remains open after handling above, consume the key
        // to prevent main window interaction
        if !matches!(app.modal, Modal::None) {
            return false;
        }

        // Global shortcuts
        if let Some(should_exit) = global::handle_global_key(ke, app) {
            return should_exit;
        }

        // Pane-specific handling
        return match app.focus {
            Focus::Search => search::handle_search_key(ke, app),
            Focus::Filters => filters::handle_filters_key(ke, app),
            Focus::Results => results::handle_results_key(ke, app),
        };
    }

    // Resize and other event kinds only trigger the redraw in the app loop.
    false
}
