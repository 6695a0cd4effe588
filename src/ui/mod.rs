//! Rendering layer: composes the header, panes, footer, and overlays into
//! one frame. All content comes straight from [`AppState`]; drawing never
//! mutates anything except the list scroll offsets ratatui tracks.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::state::{AppState, Modal};
use crate::theme::{Theme, theme};

mod compare;
mod details;
mod help;
mod helpers;
mod panes;

use helpers::{centered_rect, compare_badge, compare_badge_style};

/// What: Draw one full frame.
///
/// Details:
/// - Layout: header row, search input, main three-pane row, footer. The
///   Filters pane drops out of the main row when hidden; overlays render on
///   top of everything.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(th.base).fg(th.text)),
        area,
    );

    let footer_height = u16::from(app.show_keybinds_footer)
        + u16::from(!app.filters.to_query_string().is_empty());
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .split(area);

    draw_header(f, app, rows[0], &th);
    panes::draw_search(f, app, rows[1], &th);
    draw_main_row(f, app, rows[2], &th);
    if footer_height > 0 {
        draw_footer(f, app, rows[3], &th);
    }

    match &app.modal {
        Modal::None => {}
        Modal::Help => help::draw_help(f, app, &th),
        Modal::Compare => compare::draw_compare(f, app, &th),
        Modal::NotFound { id } => draw_not_found(f, id.clone(), &th),
    }
}

/// Title on the left, compare badge on the right.
fn draw_header(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let header_bg = Style::default().bg(th.mantle);
    f.render_widget(Block::default().style(header_bg), area);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                " Carsea ",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled("· car catalog", Style::default().fg(th.subtext)),
        ]))
        .style(header_bg),
        area,
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{} ", compare_badge(app)),
            compare_badge_style(app, th),
        )))
        .style(header_bg)
        .right_aligned(),
        area,
    );
}

/// Filters / Results / Details, split by the configured percentages.
fn draw_main_row(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    if app.show_filters_pane {
        let cols = Layout::horizontal([
            Constraint::Percentage(app.layout_left_pct),
            Constraint::Percentage(app.layout_center_pct),
            Constraint::Percentage(app.layout_right_pct),
        ])
        .split(area);
        panes::draw_filters(f, app, cols[0], th);
        panes::draw_results(f, app, cols[1], th);
        details::draw_details(f, app, cols[2], th);
    } else {
        let cols = Layout::horizontal([
            Constraint::Percentage(app.layout_left_pct + app.layout_center_pct),
            Constraint::Percentage(app.layout_right_pct),
        ])
        .split(area);
        panes::draw_results(f, app, cols[0], th);
        details::draw_details(f, app, cols[1], th);
    }
}

/// Key hints, plus the shareable query string when filters are active.
fn draw_footer(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let mut lines: Vec<Line> = Vec::new();
    if app.show_keybinds_footer {
        lines.push(Line::from(Span::styled(
            " Tab panes · Space compare · c compare view · s sort · F1 help · q quit",
            Style::default().fg(th.subtext),
        )));
    }
    let qs = app.filters.to_query_string();
    if !qs.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(" filter: ", Style::default().fg(th.subtext)),
            Span::styled(qs, Style::default().fg(th.sapphire)),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(th.mantle)),
        area,
    );
}

/// The not-found view for an unknown record id given on the command line.
fn draw_not_found(f: &mut Frame, id: String, th: &Theme) {
    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);
    let block = Block::bordered()
        .title(" Not found ")
        .border_style(Style::default().fg(th.red))
        .style(Style::default().bg(th.mantle).fg(th.text));
    let body = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            format!("No car with id \"{id}\" exists in the catalog."),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "The link may be stale or the id mistyped.",
            Style::default().fg(th.subtext),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to browse the catalog.",
            Style::default().fg(th.subtext),
        )),
    ])
    .block(block)
    .centered();
    f.render_widget(body, area);
}
