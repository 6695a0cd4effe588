use std::env;
use std::path::{Path, PathBuf};

/// What: Locate the active theme configuration file.
///
/// Output:
/// - `Some(PathBuf)` pointing to the first readable `theme.conf`; `None` when
///   nothing exists.
///
/// Details:
/// - Prefers `$HOME/.config/carsea/theme.conf`, then the same file under
///   `XDG_CONFIG_HOME`.
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    resolve_config_file("theme.conf")
}

/// What: Locate the active settings configuration file (`settings.conf`).
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    resolve_config_file("settings.conf")
}

/// What: Locate the keybindings configuration file (`keybinds.conf`).
pub(crate) fn resolve_keybinds_config_path() -> Option<PathBuf> {
    resolve_config_file("keybinds.conf")
}

/// Candidate resolution shared by the three config files: HOME first, then
/// XDG, first existing file wins.
fn resolve_config_file(name: &str) -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(Path::new(h).join(".config").join("carsea").join(name));
    }
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join("carsea").join(name));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// What: Resolve an XDG base directory, falling back to `$HOME` with provided segments.
///
/// Inputs:
/// - `var`: Environment variable name, e.g., `XDG_CONFIG_HOME`.
/// - `home_default`: Path segments appended to `$HOME` when the variable is unset.
///
/// Details:
/// - Treats empty environment values as unset and gracefully handles missing `$HOME`.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Build `$HOME/.config/carsea`, ensuring the directory exists when `$HOME` is set.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("carsea");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// What: Resolve the Carsea configuration directory, ensuring it exists on disk.
///
/// Output:
/// - `PathBuf` pointing to the Carsea config directory.
///
/// Details:
/// - Prefers `$HOME/.config/carsea`, falling back to `XDG_CONFIG_HOME/carsea`
///   when necessary.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join("carsea");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Obtain the logs subdirectory inside the Carsea config folder.
///
/// Output:
/// - `PathBuf` leading to the `logs` directory (created if missing).
pub fn logs_dir() -> PathBuf {
    let base = config_dir();
    let dir = base.join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: Verify path helpers resolve under the Carsea config directory rooted at `HOME`.
    ///
    /// Inputs:
    /// - Temporary `HOME` directory substituted to capture generated paths.
    ///
    /// Output:
    /// - `config_dir` and `logs_dir` end with `carsea` and `logs` respectively.
    ///
    /// Details:
    /// - Restores the original `HOME` afterwards to avoid polluting the real
    ///   configuration tree.
    fn paths_config_and_logs_under_home() {
        let _home_guard = crate::test_utils::lock_home_mutex();
        let orig_home = std::env::var_os("HOME");
        let base = std::env::temp_dir().join(format!(
            "carsea_test_paths_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let _ = std::fs::create_dir_all(&base);
        unsafe { std::env::set_var("HOME", base.display().to_string()) };
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert!(cfg.ends_with("carsea"));
        assert!(logs.ends_with("logs"));
        assert!(logs.starts_with(&cfg));
        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }
}
