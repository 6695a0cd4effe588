//! Theme and settings system for Carsea.
//!
//! Colors, layout, and keybindings come from plain `key = value` files under
//! the user's config directory. Public re-exports keep the `crate::theme::*`
//! API stable.

pub mod config;
mod parsing;
mod paths;
mod settings;
mod store;
mod types;

pub use config::{
    ensure_settings_keys_present, save_show_filters_pane, save_show_keybinds_footer,
    save_sort_mode, write_skeletons_if_missing,
};
pub use paths::{config_dir, logs_dir};
pub use settings::settings;
pub use store::{reload_theme, theme};
pub use types::{KeyChord, KeyMap, Settings, Theme, chord_matches};
