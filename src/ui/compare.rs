//! The Compare overlay: up to three records side by side.

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table};

use crate::compare::COMPARE_CAPACITY;
use crate::state::{AppState, CarRecord};
use crate::theme::Theme;

use super::helpers::centered_rect;

/// Spec rows of the comparison table, in display order.
fn spec_rows(car: &CarRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Manufacturer", car.manufacturer.clone()),
        ("Year", car.year.to_string()),
        ("Category", car.category.clone()),
        ("Engine", car.specs.engine.clone()),
        ("Power", format!("{} hp", car.specs.horsepower)),
        ("Torque", format!("{} Nm", car.specs.torque)),
        ("Transmission", car.specs.transmission.clone()),
        ("Drivetrain", car.specs.drivetrain.clone()),
        ("Fuel economy", car.specs.fuel_efficiency.clone()),
        ("Length", format!("{} mm", car.specs.dimensions.length)),
        ("Width", format!("{} mm", car.specs.dimensions.width)),
        ("Height", format!("{} mm", car.specs.dimensions.height)),
        ("Wheelbase", format!("{} mm", car.specs.dimensions.wheelbase)),
        ("Price", car.price.clone()),
    ]
}

/// What: Draw the full-screen comparison overlay.
///
/// Details:
/// - An empty comparison set renders the pick-some-cars hint instead of a
///   table; members render one column each with the selected column
///   emphasized for removal.
pub(super) fn draw_compare(f: &mut Frame, app: &AppState, th: &Theme) {
    let area = centered_rect(88, 80, f.area());
    f.render_widget(Clear, area);

    let title = format!(" Compare ({}/{}) ", app.compare.len(), COMPARE_CAPACITY);
    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.mantle).fg(th.text));

    let members = app.compare.members(crate::catalog::all());
    if members.is_empty() {
        let hint = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "No cars selected for comparison.",
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "Press Space on a result to add up to {COMPARE_CAPACITY} cars, then open this view again."
                ),
                Style::default().fg(th.subtext),
            )),
            Line::default(),
            Line::from(Span::styled("Esc to close", Style::default().fg(th.subtext))),
        ])
        .block(block)
        .centered();
        f.render_widget(hint, area);
        return;
    }

    let selected = app.compare_selected.min(members.len() - 1);

    let header_style = Style::default().fg(th.mauve).add_modifier(Modifier::BOLD);
    let selected_style = Style::default()
        .fg(th.lavender)
        .add_modifier(Modifier::BOLD);
    let mut header_cells: Vec<Cell> = vec![Cell::from("")];
    for (i, car) in members.iter().enumerate() {
        let style = if i == selected { selected_style } else { header_style };
        header_cells.push(Cell::from(format!("{} {}", car.manufacturer, car.model)).style(style));
    }

    let per_member: Vec<Vec<(&'static str, String)>> =
        members.iter().map(|c| spec_rows(c)).collect();
    let labels: Vec<&'static str> = per_member[0].iter().map(|(l, _)| *l).collect();

    let mut rows: Vec<Row> = Vec::new();
    for (row_idx, label) in labels.iter().enumerate() {
        let mut cells: Vec<Cell> =
            vec![Cell::from(*label).style(Style::default().fg(th.subtext))];
        for (i, specs) in per_member.iter().enumerate() {
            let value = specs[row_idx].1.clone();
            let style = if i == selected {
                Style::default().fg(th.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.text)
            };
            cells.push(Cell::from(value).style(style));
        }
        let mut row = Row::new(cells);
        if row_idx % 2 == 1 {
            row = row.style(Style::default().bg(th.surface));
        }
        rows.push(row);
    }
    rows.push(Row::new(vec![Cell::from("")]));
    rows.push(Row::new(vec![
        Cell::from(""),
        Cell::from("←/→ column · x remove · C clear all · Esc close")
            .style(Style::default().fg(th.subtext)),
    ]));

    let mut widths: Vec<Constraint> = vec![Constraint::Length(14)];
    for _ in &members {
        widths.push(Constraint::Fill(1));
    }

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells).bottom_margin(1))
        .column_spacing(2)
        .block(block);
    f.render_widget(table, area);
}
