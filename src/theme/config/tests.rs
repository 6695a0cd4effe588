#[allow(clippy::module_inception)]
mod tests {
    use crate::state::SortMode;
    use crate::theme::config::theme_loader::try_load_theme_with_diagnostics;
    use crate::theme::config::{
        SETTINGS_SKELETON_CONTENT, THEME_SKELETON_CONTENT, ensure_settings_keys_present,
        save_show_filters_pane, save_sort_mode, write_skeletons_if_missing,
    };
    use crate::theme::parsing::{CANONICAL_THEME_KEYS, canonical_for_key, normalize_key};

    /// Shim HOME to a fresh temp dir and hand back its path. Callers restore
    /// HOME themselves after assertions.
    fn temp_home(tag: &str) -> std::path::PathBuf {
        let home = std::env::temp_dir().join(format!(
            "carsea_test_{tag}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let _ = std::fs::create_dir_all(&home);
        unsafe { std::env::set_var("HOME", home.display().to_string()) };
        home
    }

    fn restore_home(orig: Option<std::ffi::OsString>) {
        unsafe {
            if let Some(v) = orig {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }

    #[test]
    /// What: Exercise the theme loader on both valid and invalid theme files.
    ///
    /// Inputs:
    /// - Minimal theme file containing required canonical keys.
    /// - Second file with an unknown key and missing requirements.
    ///
    /// Output:
    /// - Successful load for the valid file and descriptive error messages for the invalid one.
    ///
    /// Details:
    /// - Uses temporary directories to avoid touching user configuration and cleans them up afterwards.
    fn config_try_load_theme_success_and_errors() {
        let dir = std::env::temp_dir().join(format!(
            "carsea_test_theme_cfg_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let _ = std::fs::create_dir_all(&dir);

        let valid = dir.join("theme.conf");
        let mut content = String::new();
        for key in CANONICAL_THEME_KEYS {
            content.push_str(&format!("{key} = #000000\n"));
        }
        std::fs::write(&valid, content).unwrap();
        let t = try_load_theme_with_diagnostics(&valid).expect("valid theme");
        assert_eq!(t.base, ratatui::style::Color::Rgb(0, 0, 0));

        let bad = dir.join("bad.conf");
        std::fs::write(&bad, "unknown_key = #ffffff\nbase = notacolor\n").unwrap();
        let err = try_load_theme_with_diagnostics(&bad).unwrap_err();
        assert!(err.contains("Unknown key"));
        assert!(err.contains("Invalid value"));
        assert!(err.contains("Missing required keys"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    /// What: Validate skeleton configuration completeness and parsing.
    ///
    /// Output:
    /// - The theme skeleton carries every canonical key and loads cleanly;
    ///   the settings skeleton covers every documented settings key.
    fn config_skeleton_completeness() {
        use std::collections::HashSet;

        let skeleton_keys: HashSet<String> = THEME_SKELETON_CONTENT
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                    return None;
                }
                let (key, _) = trimmed.split_once('=')?;
                let key = normalize_key(key);
                canonical_for_key(&key).map(str::to_string)
            })
            .collect();
        for key in CANONICAL_THEME_KEYS {
            assert!(skeleton_keys.contains(key), "missing '{key}' in theme skeleton");
        }

        let dir = std::env::temp_dir().join(format!(
            "carsea_test_skeleton_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let _ = std::fs::create_dir_all(&dir);
        let p = dir.join("theme.conf");
        std::fs::write(&p, THEME_SKELETON_CONTENT).unwrap();
        assert!(try_load_theme_with_diagnostics(&p).is_ok());
        let _ = std::fs::remove_dir_all(&dir);

        for key in ["sort_mode", "show_filters_pane", "show_keybinds_footer"] {
            assert!(
                SETTINGS_SKELETON_CONTENT.lines().any(|l| l.trim_start().starts_with(key)),
                "missing '{key}' in settings skeleton"
            );
        }
    }

    #[test]
    /// What: First-run skeletons are written once and never clobber user files.
    ///
    /// Inputs:
    /// - Fresh HOME; then a modified settings.conf and a second skeleton pass.
    fn config_skeletons_written_once() {
        let _home_guard = crate::test_utils::lock_home_mutex();
        let orig_home = std::env::var_os("HOME");
        let home = temp_home("skel_once");

        write_skeletons_if_missing();
        let cfg = home.join(".config").join("carsea");
        assert!(cfg.join("theme.conf").is_file());
        assert!(cfg.join("settings.conf").is_file());
        assert!(cfg.join("keybinds.conf").is_file());

        std::fs::write(cfg.join("settings.conf"), "sort_mode = year\n").unwrap();
        write_skeletons_if_missing();
        let body = std::fs::read_to_string(cfg.join("settings.conf")).unwrap();
        assert_eq!(body, "sort_mode = year\n");

        restore_home(orig_home);
        let _ = std::fs::remove_dir_all(&home);
    }

    #[test]
    /// What: Single-key saves rewrite the matching line in place and append
    /// when the key is new; other lines and comments survive.
    fn config_save_rewrites_single_key() {
        let _home_guard = crate::test_utils::lock_home_mutex();
        let orig_home = std::env::var_os("HOME");
        let home = temp_home("save_key");
        let cfg = home.join(".config").join("carsea");
        std::fs::create_dir_all(&cfg).unwrap();
        std::fs::write(
            cfg.join("settings.conf"),
            "# my settings\nsort_mode = catalog\nlayout_left_pct = 22\n",
        )
        .unwrap();

        save_sort_mode(SortMode::HorsepowerDesc);
        let body = std::fs::read_to_string(cfg.join("settings.conf")).unwrap();
        assert!(body.contains("sort_mode = horsepower"));
        assert!(!body.contains("sort_mode = catalog"));
        assert!(body.contains("# my settings"));
        assert!(body.contains("layout_left_pct = 22"));

        // New key appends rather than disturbing existing content.
        save_show_filters_pane(false);
        let body = std::fs::read_to_string(cfg.join("settings.conf")).unwrap();
        assert!(body.contains("show_filters_pane = false"));
        assert!(body.contains("layout_left_pct = 22"));

        restore_home(orig_home);
        let _ = std::fs::remove_dir_all(&home);
    }

    #[test]
    /// What: `ensure_settings_keys_present` appends only the missing
    /// documented keys.
    fn config_ensure_appends_missing_keys() {
        let _home_guard = crate::test_utils::lock_home_mutex();
        let orig_home = std::env::var_os("HOME");
        let home = temp_home("ensure_keys");
        let cfg = home.join(".config").join("carsea");
        std::fs::create_dir_all(&cfg).unwrap();
        std::fs::write(cfg.join("settings.conf"), "sort_mode = name\n").unwrap();

        ensure_settings_keys_present();
        let body = std::fs::read_to_string(cfg.join("settings.conf")).unwrap();
        // Existing value untouched, absent keys appended with defaults.
        assert!(body.contains("sort_mode = name"));
        assert!(!body.contains("sort_mode = catalog"));
        assert!(body.contains("show_filters_pane = true"));
        assert!(body.contains("layout_left_pct = 22"));

        restore_home(orig_home);
        let _ = std::fs::remove_dir_all(&home);
    }
}
