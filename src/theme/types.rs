//! Value types for the theme and settings layer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::state::SortMode;

/// Resolved UI palette. Every field is a concrete terminal color; the
/// canonical key names follow the Catppuccin convention the default palette
/// is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Window background.
    pub base: Color,
    /// Slightly darker background for the header/footer rows.
    pub mantle: Color,
    /// Pane and table stripe background.
    pub surface: Color,
    /// Inactive borders and separators.
    pub overlay: Color,
    /// Primary foreground.
    pub text: Color,
    /// Secondary foreground (labels, hints).
    pub subtext: Color,
    /// Focused-pane borders and links.
    pub sapphire: Color,
    /// Accent for titles and the compare badge.
    pub mauve: Color,
    /// Positive markers (record in the comparison set).
    pub green: Color,
    /// Warnings (comparison set full).
    pub yellow: Color,
    /// Negative markers.
    pub red: Color,
    /// List selection highlight.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha, the palette shipped in the theme skeleton.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            surface: Color::Rgb(0x31, 0x32, 0x44),
            overlay: Color::Rgb(0x6c, 0x70, 0x86),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// A single key combination, e.g. `ctrl+r` or `f1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyChord {
    /// Plain chord with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self { code, ctrl: false, alt: false, shift: false }
    }

    /// Chord requiring Control.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self { code, ctrl: true, alt: false, shift: false }
    }

    /// What: Decide whether a terminal key event matches this chord.
    ///
    /// Details:
    /// - Modifiers must match exactly, except that Shift is ignored for
    ///   character codes (the shifted character already encodes it).
    pub fn matches(&self, ke: &KeyEvent) -> bool {
        if ke.code != self.code {
            return false;
        }
        let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
        let alt = ke.modifiers.contains(KeyModifiers::ALT);
        let shift = ke.modifiers.contains(KeyModifiers::SHIFT);
        let shift_ok = matches!(self.code, KeyCode::Char(_)) || shift == self.shift;
        ctrl == self.ctrl && alt == self.alt && shift_ok
    }
}

/// Resolved keybindings for actions that work from any pane. Pane-local keys
/// (arrows, Space, Esc) are fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Toggle the help overlay.
    pub help_overlay: Vec<KeyChord>,
    /// Exit the application.
    pub exit: Vec<KeyChord>,
    /// Cycle pane focus.
    pub pane_next: Vec<KeyChord>,
    /// Cycle the results sort mode.
    pub change_sort: Vec<KeyChord>,
    /// Re-read theme.conf and apply it.
    pub reload_theme: Vec<KeyChord>,
    /// Open the compare overlay.
    pub compare_view: Vec<KeyChord>,
    /// Reset filters to defaults (the search query is kept).
    pub reset_filters: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            help_overlay: vec![KeyChord::plain(KeyCode::F(1))],
            exit: vec![KeyChord::ctrl(KeyCode::Char('c'))],
            pane_next: vec![KeyChord::plain(KeyCode::Tab)],
            change_sort: vec![KeyChord::plain(KeyCode::F(4))],
            reload_theme: vec![KeyChord::plain(KeyCode::F(5))],
            compare_view: vec![KeyChord::plain(KeyCode::F(2))],
            reset_filters: vec![KeyChord::ctrl(KeyCode::Char('r'))],
        }
    }
}

/// Whether any chord in a binding list matches the event.
pub fn chord_matches(chords: &[KeyChord], ke: &KeyEvent) -> bool {
    chords.iter().any(|c| c.matches(ke))
}

/// User settings loaded at startup from `settings.conf` and `keybinds.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub layout_left_pct: u16,
    pub layout_center_pct: u16,
    pub layout_right_pct: u16,
    pub sort_mode: SortMode,
    pub show_filters_pane: bool,
    pub show_keybinds_footer: bool,
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout_left_pct: 22,
            layout_center_pct: 40,
            layout_right_pct: 38,
            sort_mode: SortMode::DatasetOrder,
            show_filters_pane: true,
            show_keybinds_footer: true,
            keymap: KeyMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Chord matching requires exact modifiers except Shift on characters.
    fn key_chord_matching() {
        let plain_q = KeyChord::plain(KeyCode::Char('q'));
        assert!(plain_q.matches(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())));
        assert!(plain_q.matches(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::SHIFT)));
        assert!(!plain_q.matches(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(!plain_q.matches(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty())));

        let ctrl_c = KeyChord::ctrl(KeyCode::Char('c'));
        assert!(ctrl_c.matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!ctrl_c.matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::empty())));

        let f1 = KeyChord::plain(KeyCode::F(1));
        assert!(f1.matches(&KeyEvent::new(KeyCode::F(1), KeyModifiers::empty())));
        assert!(!f1.matches(&KeyEvent::new(KeyCode::F(1), KeyModifiers::SHIFT)));
    }

    #[test]
    /// What: Default layout percentages describe one full row.
    fn settings_default_layout_sums_to_100() {
        let s = Settings::default();
        assert_eq!(s.layout_left_pct + s.layout_center_pct + s.layout_right_pct, 100);
    }
}
