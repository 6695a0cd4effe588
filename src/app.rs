//! Application entry: CLI parsing, terminal lifecycle, and the event loop.

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::events::handle_event;
use crate::state::{AppState, FilterSpec, Focus, Modal};

/// Usage text for `--help`.
pub const USAGE: &str = "\
carsea — browse, filter, and compare cars from the bundled catalog

USAGE:
    carsea [QUERY_STRING] [--car <id>]

ARGS:
    QUERY_STRING    Initial filter state, e.g. \"q=sonata&manufacturer=Hyundai&minYear=2020\".
                    The same string is shown in the footer while filters are
                    active, so filtered views can be shared as-is.

OPTIONS:
    --car <id>      Open directly on the record with this id; an unknown id
                    shows a not-found view.
    -h, --help      Print this help.
    -V, --version   Print the version.
";

/// Parsed command-line options.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Initial filter state from a positional query string.
    pub filter: Option<FilterSpec>,
    /// Record id to open on.
    pub car: Option<String>,
    pub show_help: bool,
    pub show_version: bool,
}

/// What: Parse command-line arguments (everything after the binary name).
///
/// Details:
/// - The only positional argument is a filter query string; `--car` takes
///   the next argument or an `=value`. Unknown flags are ignored rather than
///   fatal, so stale shell aliases keep working across versions.
pub fn parse_args<I>(args: I) -> CliOptions
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliOptions::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--help" | "-h" => out.show_help = true,
            "--version" | "-V" => out.show_version = true,
            "--car" => out.car = it.next(),
            other => {
                if let Some(id) = other.strip_prefix("--car=") {
                    out.car = Some(id.to_string());
                } else if !other.starts_with('-') {
                    out.filter = Some(FilterSpec::from_query_string(other));
                }
            }
        }
    }
    out
}

/// What: Run the TUI until the user exits.
///
/// Details:
/// - Writes first-run config skeletons, loads settings, seeds the state from
///   the CLI options, then enters the terminal and the event loop. The
///   terminal is restored before the result is returned.
pub async fn run(opts: CliOptions) -> io::Result<()> {
    crate::theme::write_skeletons_if_missing();
    crate::theme::ensure_settings_keys_present();
    let settings = crate::theme::settings();

    let mut app = AppState {
        layout_left_pct: settings.layout_left_pct,
        layout_center_pct: settings.layout_center_pct,
        layout_right_pct: settings.layout_right_pct,
        sort_mode: settings.sort_mode,
        show_filters_pane: settings.show_filters_pane,
        show_keybinds_footer: settings.show_keybinds_footer,
        keymap: settings.keymap,
        ..AppState::default()
    };
    seed_state(&mut app, opts);
    crate::logic::note_viewed(&mut app);

    let mut terminal = setup_terminal()?;
    let res = event_loop(&mut terminal, &mut app).await;
    restore_terminal(&mut terminal)?;
    res
}

/// Apply CLI options to a fresh state and compute the first results list.
fn seed_state(app: &mut AppState, opts: CliOptions) {
    if let Some(spec) = opts.filter {
        app.input = spec.search_query.clone();
        app.search_caret = app.input.chars().count();
        app.filters = spec;
    }
    crate::logic::apply_filters_preserve_selection(app);

    if let Some(id) = opts.car {
        match crate::catalog::find_by_id(crate::catalog::all(), &id) {
            Some(_) => {
                // Make sure the record is visible, dropping any CLI filter
                // that would hide it, then highlight it.
                if !app.results.iter().any(|c| c.id == id) {
                    app.filters = FilterSpec::default();
                    app.input.clear();
                    app.search_caret = 0;
                    crate::logic::apply_filters_preserve_selection(app);
                }
                if let Some(pos) = app.results.iter().position(|c| c.id == id) {
                    crate::logic::selection::select_index(app, pos);
                }
                app.focus = Focus::Results;
            }
            None => app.modal = Modal::NotFound { id },
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// What: Forward terminal events over a channel and drain them into state
/// mutations, redrawing after each one.
///
/// Details:
/// - A blocking reader task feeds the channel; the async side applies each
///   event synchronously, so events are handled strictly in dispatch order.
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    // Detached reader; it ends when the channel closes on drop of `rx`.
    let _reader = tokio::task::spawn_blocking(move || {
        loop {
            match crossterm::event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    loop {
        terminal.draw(|f| crate::ui::draw(f, app))?;
        let Some(ev) = rx.recv().await else {
            break;
        };
        if handle_event(ev, app) {
            break;
        }
        crate::logic::note_viewed(app);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CliOptions {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    /// What: Argument parsing covers flags, `--car` in both spellings, and
    /// the positional query string.
    fn parse_args_variants() {
        assert_eq!(args(&[]), CliOptions::default());
        assert!(args(&["-h"]).show_help);
        assert!(args(&["--version"]).show_version);
        assert_eq!(args(&["--car", "k5-2020"]).car.as_deref(), Some("k5-2020"));
        assert_eq!(args(&["--car=k5-2020"]).car.as_deref(), Some("k5-2020"));
        assert!(args(&["--car"]).car.is_none());
        // Unknown flags are tolerated.
        assert_eq!(args(&["--sideways"]), CliOptions::default());

        let opts = args(&["q=sonata&manufacturer=Hyundai", "--car", "sonata-2023"]);
        let spec = opts.filter.expect("filter parsed");
        assert_eq!(spec.search_query, "sonata");
        assert_eq!(spec.manufacturer, "Hyundai");
        assert_eq!(opts.car.as_deref(), Some("sonata-2023"));
    }

    #[test]
    /// What: Seeding from CLI options applies the filter, highlights the
    /// requested record, and routes unknown ids to the not-found view.
    fn seed_state_filter_car_and_not_found() {
        // Filter seeding mirrors the query into the search input.
        let mut app = AppState::default();
        seed_state(
            &mut app,
            CliOptions {
                filter: Some(FilterSpec::from_query_string("q=k5")),
                ..CliOptions::default()
            },
        );
        assert_eq!(app.input, "k5");
        assert!(app.results.iter().all(|c| c.model.to_lowercase().contains("k5")));

        // A car hidden by the CLI filter drops the filter to become visible.
        let mut app = AppState::default();
        seed_state(
            &mut app,
            CliOptions {
                filter: Some(FilterSpec::from_query_string("manufacturer=Kia")),
                car: Some("sonata-2023".into()),
                ..CliOptions::default()
            },
        );
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.focus, Focus::Results);
        assert_eq!(app.results[app.selected].id, "sonata-2023");
        assert!(app.filters.is_default());

        // Unknown ids surface the not-found overlay, not an error.
        let mut app = AppState::default();
        seed_state(
            &mut app,
            CliOptions {
                car: Some("ghost-01".into()),
                ..CliOptions::default()
            },
        );
        assert_eq!(app.modal, Modal::NotFound { id: "ghost-01".into() });
    }
}
