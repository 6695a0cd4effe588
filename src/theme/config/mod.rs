//! Config-file maintenance: first-run skeletons, theme-file diagnostics, and
//! single-key saves back into `settings.conf`.

mod save;
mod skeletons;
mod theme_loader;

#[cfg(test)]
mod tests;

pub use save::{
    ensure_settings_keys_present, save_show_filters_pane, save_show_keybinds_footer,
    save_sort_mode, write_skeletons_if_missing,
};
pub(crate) use skeletons::{
    KEYBINDS_SKELETON_CONTENT, SETTINGS_SKELETON_CONTENT, THEME_SKELETON_CONTENT,
};
pub(crate) use theme_loader::try_load_theme_with_diagnostics;
