//! Core non-UI logic: state transitions over [`crate::state::AppState`].

pub mod filter;
pub mod selection;
pub mod sort;
pub mod viewed;

// Re-export public APIs to keep call sites short (crate::logic::...)
pub use filter::apply_filters_preserve_selection;
pub use selection::{move_sel, note_viewed};
pub use sort::sort_results_preserve_selection;
