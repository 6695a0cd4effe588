//! Writing settings back: single-key in-place saves, first-run skeletons, and
//! appending newly introduced keys to an existing file.

use std::path::{Path, PathBuf};

use crate::state::SortMode;
use crate::theme::parsing::normalize_key;
use crate::theme::paths::{
    config_dir, resolve_keybinds_config_path, resolve_settings_config_path,
    resolve_theme_config_path,
};

use super::{KEYBINDS_SKELETON_CONTENT, SETTINGS_SKELETON_CONTENT, THEME_SKELETON_CONTENT};

/// Settings file to write to: the resolved existing file, or the default
/// location when none exists yet.
fn settings_path_for_write() -> PathBuf {
    resolve_settings_config_path().unwrap_or_else(|| config_dir().join("settings.conf"))
}

/// What: Replace one `key = value` line in a config file, appending the key
/// when it is not present. Comments and unrelated lines are preserved.
fn update_config_value(path: &Path, key: &str, value: &str) {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    let mut lines: Vec<String> = Vec::new();
    let mut replaced = false;
    for line in content.lines() {
        let trimmed = line.trim();
        let is_match = !trimmed.starts_with('#')
            && !trimmed.starts_with("//")
            && trimmed
                .split_once('=')
                .is_some_and(|(k, _)| normalize_key(k) == key);
        if is_match && !replaced {
            lines.push(format!("{key} = {value}"));
            replaced = true;
        } else {
            lines.push(line.to_string());
        }
    }
    if !replaced {
        lines.push(format!("{key} = {value}"));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    let _ = std::fs::write(path, out);
}

/// Persist the results sort mode.
pub fn save_sort_mode(mode: SortMode) {
    update_config_value(&settings_path_for_write(), "sort_mode", mode.config_key());
}

/// Persist the Filters pane visibility toggle.
pub fn save_show_filters_pane(visible: bool) {
    update_config_value(
        &settings_path_for_write(),
        "show_filters_pane",
        if visible { "true" } else { "false" },
    );
}

/// Persist the keybindings-footer visibility toggle.
pub fn save_show_keybinds_footer(visible: bool) {
    update_config_value(
        &settings_path_for_write(),
        "show_keybinds_footer",
        if visible { "true" } else { "false" },
    );
}

/// Keys every settings file should carry, with their documented defaults.
/// Appended (not rewritten) so user edits and comments stay put.
const DOCUMENTED_SETTINGS: [(&str, &str); 6] = [
    ("layout_left_pct", "22"),
    ("layout_center_pct", "40"),
    ("layout_right_pct", "38"),
    ("sort_mode", "catalog"),
    ("show_filters_pane", "true"),
    ("show_keybinds_footer", "true"),
];

/// What: Append any documented settings key missing from `settings.conf`,
/// for discoverability after upgrades that introduce new keys.
pub fn ensure_settings_keys_present() {
    let path = settings_path_for_write();
    let content = std::fs::read_to_string(&path).unwrap_or_default();
    let present: Vec<String> = content
        .lines()
        .filter_map(|l| {
            let t = l.trim();
            if t.starts_with('#') || t.starts_with("//") {
                return None;
            }
            t.split_once('=').map(|(k, _)| normalize_key(k))
        })
        .collect();
    let mut additions = String::new();
    for (key, default) in DOCUMENTED_SETTINGS {
        if !present.iter().any(|p| p == key) {
            additions.push_str(&format!("{key} = {default}\n"));
        }
    }
    if additions.is_empty() {
        return;
    }
    let mut out = content;
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&additions);
    let _ = std::fs::write(&path, out);
}

/// What: Write commented skeleton config files on first run.
///
/// Details:
/// - Each file is only created when missing; existing files are never
///   touched here.
pub fn write_skeletons_if_missing() {
    if resolve_theme_config_path().is_none() {
        let _ = std::fs::write(config_dir().join("theme.conf"), THEME_SKELETON_CONTENT);
    }
    if resolve_settings_config_path().is_none() {
        let _ = std::fs::write(config_dir().join("settings.conf"), SETTINGS_SKELETON_CONTENT);
    }
    if resolve_keybinds_config_path().is_none() {
        let _ = std::fs::write(config_dir().join("keybinds.conf"), KEYBINDS_SKELETON_CONTENT);
    }
}
