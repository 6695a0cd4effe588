//! The details pane: full spec sheet for the highlighted record, its model
//! lineup, and related records.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::catalog;
use crate::state::{AppState, CarRecord};
use crate::theme::Theme;

use super::helpers::{display_name, section_line, spec_line};

/// How many related records the pane shows.
const RELATED_LIMIT: usize = 3;

/// What: Render the details pane for the highlighted record.
///
/// Details:
/// - Optional spec sections render only when present; the lineup and related
///   blocks come from the catalog lookup helpers. Content scrolls with
///   `[`/`]` via `app.details_scroll`.
pub(super) fn draw_details(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let block = Block::bordered()
        .title(" Details ")
        .border_style(Style::default().fg(th.overlay));

    let Some(car) = app.selected_car() else {
        let hint = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "Nothing to show.",
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Highlight a car in Results to see its spec sheet.",
                Style::default().fg(th.subtext),
            )),
        ])
        .block(block)
        .centered();
        f.render_widget(hint, area);
        return;
    };

    let mut lines = car_lines(car, th);

    let records = catalog::all();
    lines.push(Line::default());
    lines.push(section_line("Model lineup", th));
    let lineup = catalog::lineup_for(records, car);
    for entry in &lineup {
        let marker = if entry.id == car.id { "▶ " } else { "  " };
        let style = if entry.id == car.id {
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        let secondary = entry.variant.clone().unwrap_or_else(|| entry.category.clone());
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), style),
            Span::styled(format!("{} · {}", entry.year, secondary), style),
        ]));
    }
    if lineup.len() == 1 {
        lines.push(Line::from(Span::styled(
            format!("Only the {} model year is cataloged.", car.year),
            Style::default().fg(th.subtext),
        )));
    }

    let related = catalog::related_to(records, car, RELATED_LIMIT);
    if !related.is_empty() {
        lines.push(Line::default());
        lines.push(section_line("Related cars", th));
        for entry in &related {
            lines.push(Line::from(Span::styled(
                format!("  {}", display_name(entry)),
                Style::default().fg(th.text),
            )));
        }
    }

    if !car.model_info.introduction.is_empty() {
        lines.push(Line::default());
        lines.push(section_line("About", th));
        for para in car.model_info.introduction.split("\n\n") {
            lines.push(Line::from(Span::styled(
                para.to_string(),
                Style::default().fg(th.text),
            )));
            lines.push(Line::default());
        }
    }

    let scroll = app.details_scroll.min(lines.len().saturating_sub(1) as u16);
    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(body, area);
}

/// The spec sheet proper: header, powertrain, optional sections, body.
fn car_lines(car: &CarRecord, th: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    let mut title = display_name(car);
    if let Some(variant) = &car.variant {
        title.push_str(&format!(" — {variant}"));
    }
    lines.push(Line::from(Span::styled(
        title,
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} · {}", car.category, car.price),
        Style::default().fg(th.subtext),
    )));

    lines.push(Line::default());
    lines.push(section_line("Powertrain", th));
    lines.push(spec_line("Engine", car.specs.engine.clone(), th));
    lines.push(spec_line("Power", format!("{} hp", car.specs.horsepower), th));
    lines.push(spec_line("Torque", format!("{} Nm", car.specs.torque), th));
    lines.push(spec_line("Transmission", car.specs.transmission.clone(), th));
    lines.push(spec_line("Drivetrain", car.specs.drivetrain.clone(), th));
    if !car.specs.fuel_efficiency.is_empty() {
        lines.push(spec_line("Fuel economy", car.specs.fuel_efficiency.clone(), th));
    }

    if let Some(engine) = &car.specs.engine_details {
        lines.push(Line::default());
        lines.push(section_line("Engine detail", th));
        if let Some(v) = engine.displacement {
            lines.push(spec_line("Displacement", format!("{v} cc"), th));
        }
        if let Some(v) = engine.cylinders {
            lines.push(spec_line("Cylinders", v.to_string(), th));
        }
        if let Some(v) = &engine.compression_ratio {
            lines.push(spec_line("Compression", v.clone(), th));
        }
        if let Some(v) = engine.max_power_rpm {
            lines.push(spec_line("Power rpm", v.to_string(), th));
        }
        if let Some(v) = engine.max_torque_rpm {
            lines.push(spec_line("Torque rpm", v.to_string(), th));
        }
        if let Some(v) = &engine.fuel_injection {
            lines.push(spec_line("Injection", v.clone(), th));
        }
        if let Some(v) = &engine.turbocharger {
            lines.push(spec_line("Turbo", v.clone(), th));
        }
    }

    if let Some(perf) = &car.specs.performance {
        lines.push(Line::default());
        lines.push(section_line("Performance", th));
        if let Some(v) = perf.acceleration {
            lines.push(spec_line("0-100 km/h", format!("{v} s"), th));
        }
        if let Some(v) = perf.top_speed {
            lines.push(spec_line("Top speed", format!("{v} km/h"), th));
        }
        if let Some(v) = &perf.combined_fuel_economy {
            lines.push(spec_line("Combined", v.clone(), th));
        }
        if let Some(v) = perf.braking_distance {
            lines.push(spec_line("Braking", format!("{v} m (100-0)"), th));
        }
    }

    if let Some(ev) = &car.specs.electric {
        lines.push(Line::default());
        lines.push(section_line("Electric system", th));
        if let Some(v) = ev.battery_capacity {
            lines.push(spec_line("Battery", format!("{v} kWh"), th));
        }
        if let Some(v) = ev.range {
            lines.push(spec_line("Range", format!("{v} km"), th));
        }
        if let Some(v) = &ev.fast_charging_time {
            lines.push(spec_line("Fast charge", v.clone(), th));
        }
        if let Some(v) = ev.motor_power_kw {
            lines.push(spec_line("Motor", format!("{v} kW"), th));
        }
        if let Some(v2l) = ev.v2l {
            lines.push(spec_line("V2L", if v2l { "yes" } else { "no" }.to_string(), th));
        }
    }

    lines.push(Line::default());
    lines.push(section_line("Body", th));
    let d = &car.specs.dimensions;
    lines.push(spec_line("Length", format!("{} mm", d.length), th));
    lines.push(spec_line("Width", format!("{} mm", d.width), th));
    lines.push(spec_line("Height", format!("{} mm", d.height), th));
    lines.push(spec_line("Wheelbase", format!("{} mm", d.wheelbase), th));
    if let Some(v) = d.ground_clearance {
        lines.push(spec_line("Clearance", format!("{v} mm"), th));
    }
    if let Some(v) = d.curb_weight {
        lines.push(spec_line("Curb weight", format!("{v} kg"), th));
    }
    if let Some(v) = d.trunk_capacity {
        lines.push(spec_line("Trunk", format!("{v} L"), th));
    }

    if let Some(safety) = &car.specs.safety {
        lines.push(Line::default());
        lines.push(section_line("Safety", th));
        if let Some(v) = safety.airbags {
            lines.push(spec_line("Airbags", v.to_string(), th));
        }
        if let Some(stars) = safety.ncap_rating {
            let stars = stars.min(5);
            let mut rating = "★".repeat(stars as usize);
            rating.push_str(&"☆".repeat(5 - stars as usize));
            if let Some(org) = &safety.ncap_org {
                rating.push_str(&format!(" ({org}"));
                if let Some(year) = safety.ncap_year {
                    rating.push_str(&format!(" {year}"));
                }
                rating.push(')');
            }
            lines.push(spec_line("Crash test", rating, th));
        }
        if !safety.adas_features.is_empty() {
            lines.push(spec_line("ADAS", safety.adas_features.join(", "), th));
        }
    }

    if let Some(comfort) = &car.specs.comfort {
        lines.push(Line::default());
        lines.push(section_line("Comfort", th));
        if let Some(v) = comfort.seats {
            lines.push(spec_line("Seats", v.to_string(), th));
        }
        if let Some(v) = &comfort.seat_material {
            lines.push(spec_line("Seat material", v.clone(), th));
        }
        if let Some(v) = &comfort.sunroof {
            lines.push(spec_line("Sunroof", v.clone(), th));
        }
        if let Some(v) = comfort.doors {
            lines.push(spec_line("Doors", v.to_string(), th));
        }
    }

    lines
}
