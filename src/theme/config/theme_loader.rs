//! Strict theme-file loading with human-readable diagnostics.

use std::path::Path;

use crate::theme::parsing::{
    CANONICAL_THEME_KEYS, canonical_for_key, normalize_key, parse_hex_color, strip_inline_comment,
};
use crate::theme::types::Theme;

/// What: Load a theme file, reporting every problem instead of silently
/// skipping bad lines.
///
/// Inputs:
/// - `path`: Theme file to parse.
///
/// Output:
/// - `Ok(Theme)` when every canonical key is present with a valid color.
/// - `Err(message)` listing unknown keys, invalid values, and missing
///   required keys; callers fall back to the default palette.
pub(crate) fn try_load_theme_with_diagnostics(path: &Path) -> Result<Theme, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;

    let mut theme = Theme::default();
    let mut seen: Vec<&'static str> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    let mut invalid: Vec<String> = Vec::new();

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
        let Some(canon) = canonical_for_key(&key) else {
            unknown.push(key);
            continue;
        };
        let Some(color) = parse_hex_color(val) else {
            invalid.push(format!("{canon}={val}"));
            continue;
        };
        if !seen.contains(&canon) {
            seen.push(canon);
        }
        match canon {
            "base" => theme.base = color,
            "mantle" => theme.mantle = color,
            "surface" => theme.surface = color,
            "overlay" => theme.overlay = color,
            "text" => theme.text = color,
            "subtext" => theme.subtext = color,
            "sapphire" => theme.sapphire = color,
            "mauve" => theme.mauve = color,
            "green" => theme.green = color,
            "yellow" => theme.yellow = color,
            "red" => theme.red = color,
            "lavender" => theme.lavender = color,
            _ => {}
        }
    }

    let missing: Vec<&str> = CANONICAL_THEME_KEYS
        .into_iter()
        .filter(|k| !seen.contains(k))
        .collect();

    if unknown.is_empty() && invalid.is_empty() && missing.is_empty() {
        return Ok(theme);
    }

    let mut msg = Vec::new();
    if !unknown.is_empty() {
        msg.push(format!("Unknown key(s): {}", unknown.join(", ")));
    }
    if !invalid.is_empty() {
        msg.push(format!("Invalid value(s): {}", invalid.join(", ")));
    }
    if !missing.is_empty() {
        msg.push(format!("Missing required keys: {}", missing.join(", ")));
    }
    Err(msg.join("; "))
}
