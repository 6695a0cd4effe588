//! Overlay (modal) state for the main window.

/// Active full-screen overlay, if any. While a modal is open the main panes
/// do not receive key events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    /// Keybinding reference.
    Help,
    /// Side-by-side comparison table over the comparison set.
    Compare,
    /// A record id requested on the command line did not resolve. Rendered as
    /// a normal view with an escape hatch back to Browse, never as an error.
    NotFound {
        id: String,
    },
}
