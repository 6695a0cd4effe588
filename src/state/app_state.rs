//! Central `AppState` container.

use ratatui::widgets::ListState;

use crate::compare::CompareList;
use crate::state::modal::Modal;
use crate::state::types::{CarRecord, FilterSpec, Focus, SortMode};
use crate::theme::KeyMap;

/// Global application state shared by the event and UI layers.
///
/// This structure is mutated in response to input events only; every
/// mutation completes within the event dispatch that triggered it, so a
/// redraw never observes a half-applied change.
#[derive(Debug)]
pub struct AppState {
    /// Current search input text.
    pub input: String,
    /// Caret position (in characters) within the search input.
    /// Always clamped to the range 0..=input.chars().count().
    pub search_caret: usize,
    /// The active filter criteria; `search_query` mirrors `input`.
    pub filters: FilterSpec,
    /// Records matching the current filters, in the active sort order.
    pub results: Vec<CarRecord>,
    /// Index into `results` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the Results pane.
    pub list_state: ListState,
    /// Which pane is currently focused.
    pub focus: Focus,
    /// Highlighted row of the Filters pane (index into `FilterField::ALL`).
    pub filter_row: usize,
    /// Active modal overlay, if any.
    pub modal: Modal,
    /// The comparison set, owned here and mutated only through its methods.
    pub compare: CompareList,
    /// Highlighted column inside the compare overlay.
    pub compare_selected: usize,
    /// Current sort mode for results.
    pub sort_mode: SortMode,
    /// Scroll offset (lines) for the details pane.
    pub details_scroll: u16,
    /// Scroll offset (lines) for the help overlay.
    pub help_scroll: u16,
    /// Id of the record most recently appended to the view log, to avoid
    /// duplicate entries while the selection rests on one record.
    pub viewed_logged_for: Option<String>,

    // User settings loaded at startup
    pub layout_left_pct: u16,
    pub layout_center_pct: u16,
    pub layout_right_pct: u16,
    /// Whether the Filters pane is visible in the main row.
    pub show_filters_pane: bool,
    /// Whether to show the keybindings footer.
    pub show_keybinds_footer: bool,
    /// Resolved key bindings from user settings.
    pub keymap: KeyMap,
}

impl Default for AppState {
    /// Construct a default, empty [`AppState`] with selection states and
    /// layout values at their startup defaults. The catalog is not consulted
    /// here; the app loop seeds `results` before the first draw.
    fn default() -> Self {
        Self {
            input: String::new(),
            search_caret: 0,
            filters: FilterSpec::default(),
            results: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            focus: Focus::Search,
            filter_row: 0,
            modal: Modal::None,
            compare: CompareList::default(),
            compare_selected: 0,
            sort_mode: SortMode::DatasetOrder,
            details_scroll: 0,
            help_scroll: 0,
            viewed_logged_for: None,

            layout_left_pct: 22,
            layout_center_pct: 40,
            layout_right_pct: 38,
            show_filters_pane: true,
            show_keybinds_footer: true,
            keymap: KeyMap::default(),
        }
    }
}

impl AppState {
    /// The currently highlighted record, if any.
    pub fn selected_car(&self) -> Option<&CarRecord> {
        self.results.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Verify `AppState::default` starts empty, unfiltered, and focused
    /// on the search pane.
    ///
    /// Output:
    /// - Selection indices at zero, empty result/compare collections, default
    ///   filter spec, no modal, filters pane visible.
    fn app_state_default_is_empty_and_unfiltered() {
        let app = AppState::default();
        assert_eq!(app.selected, 0);
        assert!(app.results.is_empty());
        assert!(app.input.is_empty());
        assert!(app.filters.is_default());
        assert!(app.compare.is_empty());
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.focus, Focus::Search);
        assert_eq!(app.sort_mode, SortMode::DatasetOrder);
        assert!(app.show_filters_pane);
        assert!(app.selected_car().is_none());
        // Layout percentages describe one full row.
        assert_eq!(
            app.layout_left_pct + app.layout_center_pct + app.layout_right_pct,
            100
        );
    }
}
