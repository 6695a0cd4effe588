//! Commented starter files written on first run so every tunable is
//! discoverable without documentation.

/// Default `theme.conf`: the full canonical key set with the shipped palette.
pub(crate) const THEME_SKELETON_CONTENT: &str = "\
# Carsea theme
# Colors are #RRGGBB. Aliases: background=base, fg=text, muted=subtext,
# accent=mauve, highlight=lavender, border=overlay, blue=sapphire.

base = #1e1e2e
mantle = #181825
surface = #313244
overlay = #6c7086
text = #cdd6f4
subtext = #a6adc8
sapphire = #74c7ec
mauve = #cba6f7
green = #a6e3a1
yellow = #f9e2af
red = #f38ba8
lavender = #b4befe
";

/// Default `settings.conf` with every supported key at its default value.
pub(crate) const SETTINGS_SKELETON_CONTENT: &str = "\
# Carsea settings
# Layout percentages apply to the Filters / Results / Details row and must
# sum to 100.

layout_left_pct = 22
layout_center_pct = 40
layout_right_pct = 38
# catalog | year | horsepower | name
sort_mode = catalog
show_filters_pane = true
show_keybinds_footer = true
";

/// Default `keybinds.conf`; every line is commented so defaults stay in code.
pub(crate) const KEYBINDS_SKELETON_CONTENT: &str = "\
# Carsea keybindings
# Chords are modifier+key, e.g. ctrl+r, f5, tab, space, x.

# keybind_help = f1
# keybind_exit = ctrl+c
# keybind_pane_next = tab
# keybind_change_sort = f4
# keybind_reload_theme = f5
# keybind_compare_view = f2
# keybind_reset_filters = ctrl+r
";
