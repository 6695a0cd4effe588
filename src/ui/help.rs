//! The Help overlay: key reference.

use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::state::AppState;
use crate::theme::Theme;

use super::helpers::centered_rect;

const BINDINGS: [(&str, &str); 20] = [
    ("Tab", "cycle pane focus"),
    ("/", "jump to Search (from Results)"),
    ("Enter / ↓", "leave Search for Results"),
    ("↑ ↓ PgUp PgDn", "move the results selection"),
    ("Space / Enter", "add or remove the highlighted car from Compare"),
    ("←/→", "change the highlighted filter (Filters pane)"),
    ("r", "reset filters, keeping the search query"),
    ("s / F4", "cycle result sorting (catalog, year, power, name)"),
    ("[ ]", "scroll the details pane"),
    ("f", "show or hide the Filters pane"),
    ("k", "show or hide this footer's key hints"),
    ("c / F2", "open the Compare view"),
    ("x", "remove the selected column (Compare view)"),
    ("Shift+C", "clear the comparison set (Compare view)"),
    ("F1", "toggle this help"),
    ("F5", "reload theme.conf"),
    ("Ctrl+R", "reset filters from any pane"),
    ("Esc", "close overlay / clear search / back to Search"),
    ("q", "quit (from Filters, Results, or an overlay it closes)"),
    ("Ctrl+C", "quit from anywhere"),
];

/// Draw the scrollable key reference overlay.
pub(super) fn draw_help(f: &mut Frame, app: &AppState, th: &Theme) {
    let area = centered_rect(64, 70, f.area());
    f.render_widget(Clear, area);

    let block = Block::bordered()
        .title(" Help ")
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.mantle).fg(th.text));

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Carsea — browse, filter, and compare cars",
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for (keys, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("{keys:<15} "), Style::default().fg(th.sapphire)),
            Span::styled(action.to_string(), Style::default().fg(th.text)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Bindings can be overridden in keybinds.conf; see the skeleton file.",
        Style::default().fg(th.subtext),
    )));

    let scroll = app.help_scroll.min(lines.len().saturating_sub(1) as u16);
    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(body, area);
}
