use std::fs;

use super::parsing::{normalize_key, parse_bool_like, parse_key_chord, strip_inline_comment};
use super::paths::{resolve_keybinds_config_path, resolve_settings_config_path};
use super::types::Settings;

/// What: Load user settings and keybinds from config files under HOME/XDG.
///
/// Output:
/// - A [`Settings`] value; falls back to `Settings::default()` when files are
///   missing and to per-field defaults when individual values are invalid.
///
/// Details:
/// - Reads `settings.conf` for layout, sort, and pane toggles, then
///   `keybinds.conf` for chord overrides. Unknown keys are ignored so files
///   from newer versions stay loadable.
pub fn settings() -> Settings {
    let mut out = Settings::default();

    if let Some(p) = resolve_settings_config_path()
        && let Ok(content) = fs::read_to_string(&p)
    {
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }
            let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
                continue;
            };
            let key = normalize_key(raw_key);
            let val = strip_inline_comment(raw_val.trim());
            match key.as_str() {
                "layout_left_pct" => {
                    if let Ok(v) = val.parse::<u16>() {
                        out.layout_left_pct = v;
                    }
                }
                "layout_center_pct" => {
                    if let Ok(v) = val.parse::<u16>() {
                        out.layout_center_pct = v;
                    }
                }
                "layout_right_pct" => {
                    if let Ok(v) = val.parse::<u16>() {
                        out.layout_right_pct = v;
                    }
                }
                "sort_mode" | "results_sort" => {
                    if let Some(sm) = crate::state::SortMode::from_config_key(val) {
                        out.sort_mode = sm;
                    }
                }
                "show_filters_pane" | "filters_visible" => {
                    out.show_filters_pane = parse_bool_like(val);
                }
                "show_keybinds_footer" | "keybinds_visible" => {
                    out.show_keybinds_footer = parse_bool_like(val);
                }
                _ => {}
            }
        }
    }

    // A broken layout split falls back whole; partial layouts are not usable.
    if out.layout_left_pct + out.layout_center_pct + out.layout_right_pct != 100 {
        let d = Settings::default();
        out.layout_left_pct = d.layout_left_pct;
        out.layout_center_pct = d.layout_center_pct;
        out.layout_right_pct = d.layout_right_pct;
    }

    if let Some(kp) = resolve_keybinds_config_path()
        && let Ok(content) = fs::read_to_string(&kp)
    {
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }
            let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
                continue;
            };
            let key = normalize_key(raw_key);
            let val = strip_inline_comment(raw_val.trim());
            match key.as_str() {
                "keybind_help" | "keybind_help_overlay" => {
                    if let Some(ch) = parse_key_chord(val) {
                        out.keymap.help_overlay = vec![ch];
                    }
                }
                "keybind_exit" | "keybind_quit" => {
                    if let Some(ch) = parse_key_chord(val) {
                        out.keymap.exit = vec![ch];
                    }
                }
                "keybind_pane_next" | "keybind_next_pane" | "keybind_switch_pane" => {
                    if let Some(ch) = parse_key_chord(val) {
                        out.keymap.pane_next = vec![ch];
                    }
                }
                "keybind_change_sort" | "keybind_sort" => {
                    if let Some(ch) = parse_key_chord(val) {
                        out.keymap.change_sort = vec![ch];
                    }
                }
                "keybind_reload_theme" | "keybind_reload" => {
                    if let Some(ch) = parse_key_chord(val) {
                        out.keymap.reload_theme = vec![ch];
                    }
                }
                "keybind_compare_view" | "keybind_compare" => {
                    if let Some(ch) = parse_key_chord(val) {
                        out.keymap.compare_view = vec![ch];
                    }
                }
                "keybind_reset_filters" | "keybind_reset" => {
                    if let Some(ch) = parse_key_chord(val) {
                        out.keymap.reset_filters = vec![ch];
                    }
                }
                _ => {}
            }
        }
    }

    out
}
