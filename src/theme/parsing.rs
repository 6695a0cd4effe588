//! Line-level parsing shared by the theme, settings, and keybinds loaders.

use crossterm::event::KeyCode;

use super::types::KeyChord;

/// Strip a trailing `# ...` or `// ...` comment from a config value.
///
/// The comment marker must be preceded by whitespace (or start the value) so
/// color values like `#a6e3a1` survive.
pub(crate) fn strip_inline_comment(val: &str) -> &str {
    let bytes = val.as_bytes();
    let mut cut = val.len();
    for i in 0..bytes.len() {
        let at_boundary = i == 0 || bytes[i - 1].is_ascii_whitespace();
        if !at_boundary {
            continue;
        }
        if bytes[i] == b'#' && i != 0 {
            cut = i;
            break;
        }
        if bytes[i] == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
            cut = i;
            break;
        }
    }
    val[..cut].trim()
}

/// Normalize a raw config key: lowercase, separators collapsed to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Map a normalized theme key or alias to its canonical field name.
///
/// Output:
/// - `Some(canonical)` for known keys and their aliases; `None` otherwise.
pub(crate) fn canonical_for_key(key: &str) -> Option<&'static str> {
    match key {
        "base" | "background" | "bg" => Some("base"),
        "mantle" => Some("mantle"),
        "surface" | "surface0" | "surface1" => Some("surface"),
        "overlay" | "overlay0" | "overlay1" | "border" => Some("overlay"),
        "text" | "foreground" | "fg" => Some("text"),
        "subtext" | "subtext0" | "subtext1" | "muted" => Some("subtext"),
        "sapphire" | "blue" => Some("sapphire"),
        "mauve" | "accent" => Some("mauve"),
        "green" => Some("green"),
        "yellow" => Some("yellow"),
        "red" => Some("red"),
        "lavender" | "highlight" => Some("lavender"),
        _ => None,
    }
}

/// All canonical theme keys, in skeleton order.
pub(crate) const CANONICAL_THEME_KEYS: [&str; 12] = [
    "base", "mantle", "surface", "overlay", "text", "subtext", "sapphire", "mauve", "green",
    "yellow", "red", "lavender",
];

/// Parse a `#RRGGBB` (or `RRGGBB`) color value.
pub(crate) fn parse_hex_color(val: &str) -> Option<ratatui::style::Color> {
    let hex = val.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(ratatui::style::Color::Rgb(r, g, b))
}

/// Loose boolean parse used across settings values.
pub(crate) fn parse_bool_like(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Parse a keybinding value such as `ctrl+c`, `f5`, `tab`, or `x`.
///
/// Output:
/// - `Some(KeyChord)` for a recognized chord; `None` for empty or unknown
///   values (the caller keeps its default binding).
pub(crate) fn parse_key_chord(val: &str) -> Option<KeyChord> {
    let mut ctrl = false;
    let mut alt = false;
    let mut shift = false;
    let mut code: Option<KeyCode> = None;

    for part in val.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        let lower = part.to_ascii_lowercase();
        match lower.as_str() {
            "ctrl" | "control" => ctrl = true,
            "alt" => alt = true,
            "shift" => shift = true,
            "tab" => code = Some(KeyCode::Tab),
            "enter" | "return" => code = Some(KeyCode::Enter),
            "esc" | "escape" => code = Some(KeyCode::Esc),
            "space" => code = Some(KeyCode::Char(' ')),
            "backspace" => code = Some(KeyCode::Backspace),
            "delete" | "del" => code = Some(KeyCode::Delete),
            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            other => {
                if let Some(num) = other.strip_prefix('f')
                    && let Ok(n) = num.parse::<u8>()
                    && (1..=12).contains(&n)
                {
                    code = Some(KeyCode::F(n));
                } else if other.chars().count() == 1 {
                    code = Some(KeyCode::Char(other.chars().next()?));
                } else {
                    return None;
                }
            }
        }
    }

    code.map(|code| KeyChord { code, ctrl, alt, shift })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Inline comments are stripped without harming hex color values.
    fn inline_comment_stripping() {
        assert_eq!(strip_inline_comment("#a6e3a1"), "#a6e3a1");
        assert_eq!(strip_inline_comment("#a6e3a1 # green"), "#a6e3a1");
        assert_eq!(strip_inline_comment("true // enabled"), "true");
        assert_eq!(strip_inline_comment("plain"), "plain");
    }

    #[test]
    /// What: Key normalization and canonical alias mapping.
    fn key_normalization_and_aliases() {
        assert_eq!(normalize_key("  Sort-Mode "), "sort_mode");
        assert_eq!(canonical_for_key("background"), Some("base"));
        assert_eq!(canonical_for_key("accent"), Some("mauve"));
        assert_eq!(canonical_for_key("subtext0"), Some("subtext"));
        assert_eq!(canonical_for_key("nonsense"), None);
        for key in CANONICAL_THEME_KEYS {
            assert_eq!(canonical_for_key(key), Some(key));
        }
    }

    #[test]
    /// What: Hex color parsing accepts 6-digit values with or without `#`.
    fn hex_color_parsing() {
        use ratatui::style::Color;
        assert_eq!(parse_hex_color("#a6e3a1"), Some(Color::Rgb(0xa6, 0xe3, 0xa1)));
        assert_eq!(parse_hex_color("1E1E2E"), Some(Color::Rgb(0x1e, 0x1e, 0x2e)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    /// What: Chord parsing covers modifiers, named keys, F-keys, and characters.
    fn key_chord_parsing() {
        use crossterm::event::KeyCode;
        let c = parse_key_chord("ctrl+c").unwrap();
        assert!(c.ctrl && !c.alt);
        assert_eq!(c.code, KeyCode::Char('c'));

        assert_eq!(parse_key_chord("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key_chord("Tab").unwrap().code, KeyCode::Tab);
        assert_eq!(parse_key_chord("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_chord("X").unwrap().code, KeyCode::Char('x'));
        assert!(parse_key_chord("").is_none());
        assert!(parse_key_chord("f99").is_none());
        assert!(parse_key_chord("whatever").is_none());
    }
}
