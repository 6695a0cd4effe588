//! Process-wide theme store with live reload.

use std::sync::{OnceLock, RwLock};

use super::config::try_load_theme_with_diagnostics;
use super::paths::resolve_theme_config_path;
use super::types::Theme;

/// Process-wide holder for the active theme.
static THEME: OnceLock<RwLock<Theme>> = OnceLock::new();

fn store() -> &'static RwLock<Theme> {
    THEME.get_or_init(|| RwLock::new(load_theme()))
}

/// Resolve and parse the user's theme file, falling back to the default
/// palette when the file is missing or fails its diagnostics.
fn load_theme() -> Theme {
    resolve_theme_config_path()
        .and_then(|p| try_load_theme_with_diagnostics(&p).ok())
        .unwrap_or_default()
}

/// What: Current theme, for use during a draw pass.
///
/// Output:
/// - A copy of the active [`Theme`] (the type is `Copy`; holding the lock
///   across rendering is unnecessary).
pub fn theme() -> Theme {
    *store().read().unwrap_or_else(|e| e.into_inner())
}

/// What: Re-read `theme.conf` and swap the active palette.
///
/// Details:
/// - Invalid or missing files fall back to the default palette rather than
///   keeping half-applied colors.
pub fn reload_theme() {
    let fresh = load_theme();
    *store().write().unwrap_or_else(|e| e.into_inner()) = fresh;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Reloading with HOME pointed at a custom theme picks the file up,
    /// and reloading after its removal falls back to the default palette.
    ///
    /// Inputs:
    /// - Temporary HOME containing a `theme.conf` that overrides `base`.
    ///
    /// Details:
    /// - Serialized via the HOME mutex; restores the environment afterwards.
    fn reload_picks_up_custom_theme_then_falls_back() {
        let _home_guard = crate::test_utils::lock_home_mutex();
        let orig_home = std::env::var_os("HOME");
        let home = std::env::temp_dir().join(format!(
            "carsea_test_store_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let cfg = home.join(".config").join("carsea");
        std::fs::create_dir_all(&cfg).unwrap();
        unsafe { std::env::set_var("HOME", home.display().to_string()) };

        let mut content = String::new();
        for key in crate::theme::parsing::CANONICAL_THEME_KEYS {
            let value = if key == "base" { "#101010" } else { "#cdd6f4" };
            content.push_str(&format!("{key} = {value}\n"));
        }
        std::fs::write(cfg.join("theme.conf"), content).unwrap();

        reload_theme();
        assert_eq!(theme().base, ratatui::style::Color::Rgb(0x10, 0x10, 0x10));

        std::fs::remove_file(cfg.join("theme.conf")).unwrap();
        reload_theme();
        assert_eq!(theme(), Theme::default());

        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
        let _ = std::fs::remove_dir_all(&home);
    }
}
