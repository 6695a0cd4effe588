//! Small rendering helpers shared by the panes and overlays.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::compare::COMPARE_CAPACITY;
use crate::state::{AppState, CarRecord};
use crate::theme::Theme;

/// Centered sub-rectangle taking the given percentages of the area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);
    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}

/// The `Compare n/3` badge text shown in the header.
pub(super) fn compare_badge(app: &AppState) -> String {
    format!("Compare {}/{}", app.compare.len(), COMPARE_CAPACITY)
}

/// Badge style: accent while filling, warning once full (the full badge is
/// the only surface of the capacity limit).
pub(super) fn compare_badge_style(app: &AppState, th: &Theme) -> Style {
    if app.compare.is_full() {
        Style::default().fg(th.yellow).add_modifier(Modifier::BOLD)
    } else if app.compare.is_empty() {
        Style::default().fg(th.subtext)
    } else {
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
    }
}

/// One-line display name: `Hyundai Sonata 2023`.
pub(super) fn display_name(car: &CarRecord) -> String {
    format!("{} {} {}", car.manufacturer, car.model, car.year)
}

/// A left-padded `label  value` line for spec sheets.
pub(super) fn spec_line(label: &str, value: String, th: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<13} "), Style::default().fg(th.subtext)),
        Span::styled(value, Style::default().fg(th.text)),
    ])
}

/// Section header line for the details pane.
pub(super) fn section_line(title: &str, th: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    ))
}

/// Border style for a pane, highlighted when focused.
pub(super) fn border_style(focused: bool, th: &Theme) -> Style {
    if focused {
        Style::default().fg(th.sapphire)
    } else {
        Style::default().fg(th.overlay)
    }
}
