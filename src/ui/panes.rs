//! The three main panes: Search input, Filters, and Results.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use crate::state::{AppState, FilterField, Focus, YEAR_MAX, YEAR_MIN};
use crate::theme::Theme;

use super::helpers::{border_style, display_name};

/// Search input with a visible caret while focused.
pub(super) fn draw_search(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Search;
    let block = Block::bordered()
        .title(" Search ")
        .border_style(border_style(focused, th));
    let inner = block.inner(area);
    let text = if app.input.is_empty() && !focused {
        Span::styled(
            "type to search manufacturer or model...",
            Style::default().fg(th.subtext),
        )
    } else {
        Span::styled(app.input.clone(), Style::default().fg(th.text))
    };
    f.render_widget(Paragraph::new(Line::from(text)).block(block), area);
    if focused {
        let x = inner.x + (app.search_caret as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position(Position::new(x, inner.y));
    }
}

/// Filter rows with their current values; Left/Right cycles the highlighted
/// row through the catalog facets.
pub(super) fn draw_filters(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Filters;
    let block = Block::bordered()
        .title(" Filters ")
        .border_style(border_style(focused, th));

    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in FilterField::ALL.iter().enumerate() {
        let value = match field {
            FilterField::Manufacturer => any_or(&app.filters.manufacturer),
            FilterField::Category => any_or(&app.filters.category),
            FilterField::MinYear => year_or_any(app.filters.min_year, YEAR_MIN),
            FilterField::MaxYear => year_or_any(app.filters.max_year, YEAR_MAX),
        };
        let selected = focused && i == app.filter_row;
        let row_style = if selected {
            Style::default().fg(th.base).bg(th.lavender)
        } else {
            Style::default().fg(th.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<13}", field.label()), Style::default().fg(th.subtext)),
            Span::styled(format!(" {value} "), row_style),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "←/→ change · r reset",
        Style::default().fg(th.subtext),
    )));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn any_or(value: &str) -> String {
    if value.is_empty() {
        "Any".to_string()
    } else {
        value.to_string()
    }
}

fn year_or_any(value: u16, default: u16) -> String {
    if value == default {
        "Any".to_string()
    } else {
        value.to_string()
    }
}

/// Results list with comparison markers and the sort mode in the title.
pub(super) fn draw_results(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Results;
    let title = format!(" Results ({}) · sort: {} ", app.results.len(), app.sort_mode.label());
    let block = Block::bordered()
        .title(title)
        .border_style(border_style(focused, th));

    if app.results.is_empty() {
        let hint = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "No cars match the current filters.",
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try a different query, or press r to reset filters.",
                Style::default().fg(th.subtext),
            )),
        ])
        .block(block)
        .centered();
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|car| {
            let in_compare = app.compare.contains(&car.id);
            let marker = if in_compare {
                Span::styled("◆ ", Style::default().fg(th.green))
            } else {
                Span::styled("  ", Style::default())
            };
            let secondary = car.variant.clone().unwrap_or_else(|| car.category.clone());
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(display_name(car), Style::default().fg(th.text)),
                Span::styled(format!("  · {secondary}"), Style::default().fg(th.subtext)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(th.base).bg(th.lavender))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}
