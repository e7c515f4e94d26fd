//! Reusable dashboard widgets.

use super::theme::{colors, Styles};
use crate::scoring::RadarEntry;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Context, Line as Segment},
        Block, Borders, LineGauge, Paragraph, Wrap,
    },
};
use std::f64::consts::{FRAC_PI_2, TAU};
use unicode_width::UnicodeWidthStr;

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Outer radius of the radar plot; the score scale runs to 10.
const RADAR_EXTENT: f64 = 12.0;
/// Radius of the spoke number labels.
const LABEL_RADIUS: f64 = 11.0;

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect, required_width: u16, required_height: u16) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().medium).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("Current: ", Styles::label()),
            Span::styled(format!("{}x{}", area.width, area.height), Styles::value()),
        ]),
        Line::from(vec![
            Span::styled("Required: ", Styles::label()),
            Span::styled(format!("{required_width}x{required_height}"), Styles::value()),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Point at `radius` on spoke `index` of `count`, starting at the top and
/// running clockwise.
fn spoke_point(index: usize, count: usize, radius: f64) -> (f64, f64) {
    let angle = FRAC_PI_2 - TAU * index as f64 / count.max(1) as f64;
    (radius * angle.cos(), radius * angle.sin())
}

fn draw_polygon(ctx: &mut Context<'_>, points: &[(f64, f64)], color: Color) {
    for (i, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(i + 1) % points.len()];
        ctx.draw(&Segment::new(x1, y1, x2, y2, color));
    }
}

/// Radar plot of every category: the goal outline under the actual
/// scores. Spokes are numbered in category order.
pub fn render_radar(frame: &mut Frame, area: Rect, entries: &[RadarEntry]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false))
        .title(Span::styled(
            " Actual Resilience vs Industry Leader Goal ",
            Styles::section_title(),
        ));
    let inner = block.inner(area);
    if entries.is_empty() || inner.height == 0 {
        frame.render_widget(block, area);
        return;
    }

    // Cells are about twice as tall as wide; widen the x range to keep the
    // plot round.
    let aspect = f64::from(inner.width) / (2.0 * f64::from(inner.height));
    let x_extent = RADAR_EXTENT * aspect.max(1.0);
    let y_extent = RADAR_EXTENT * (1.0 / aspect).max(1.0);

    let scheme = colors();
    let count = entries.len();
    let goals: Vec<(f64, f64)> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| spoke_point(i, count, e.goal))
        .collect();
    let actual: Vec<(f64, f64)> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| spoke_point(i, count, e.score))
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-y_extent, y_extent])
        .paint(move |ctx| {
            for i in 0..count {
                let (x, y) = spoke_point(i, count, 10.0);
                ctx.draw(&Segment::new(0.0, 0.0, x, y, scheme.muted));
            }
            ctx.layer();
            draw_polygon(ctx, &goals, scheme.goal);
            ctx.layer();
            draw_polygon(ctx, &actual, scheme.accent);
            for i in 0..count {
                let (x, y) = spoke_point(i, count, LABEL_RADIUS);
                ctx.print(x, y, Span::styled((i + 1).to_string(), Styles::label()));
            }
        });
    frame.render_widget(canvas, area);
}

/// One gauge per category: actual score against the 0..=10 scale, with
/// the goal in the label.
pub fn render_category_gauges(frame: &mut Frame, area: Rect, entries: &[RadarEntry]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false))
        .title(Span::styled(
            " Category Scores ",
            Styles::section_title(),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_width = entries
        .iter()
        .map(|e| UnicodeWidthStr::width(e.name.as_str()))
        .max()
        .unwrap_or(0);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); entries.len()])
        .split(inner);

    let scheme = colors();
    for (i, (entry, row)) in entries.iter().zip(rows.iter()).enumerate() {
        let padding = " ".repeat(label_width.saturating_sub(UnicodeWidthStr::width(entry.name.as_str())));
        let label = Line::from(vec![
            Span::styled(format!("{} ", i + 1), Styles::label()),
            Span::styled(format!("{}{padding} ", entry.name), Styles::text()),
            Span::styled(format!("{:>4.1}", entry.score), Styles::value()),
            Span::styled(format!("/{:<2}", entry.goal), Style::default().fg(scheme.goal)),
        ]);
        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(scheme.score_color(entry.score, entry.goal)))
            .unfilled_style(Style::default().fg(scheme.muted))
            .ratio((entry.score / 10.0).clamp(0.0, 1.0))
            .label(label);
        frame.render_widget(gauge, *row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_size_check() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert_eq!(check_terminal_size(79, 40), Err((MIN_WIDTH, MIN_HEIGHT)));
        assert!(check_terminal_size(120, 23).is_err());
    }

    #[test]
    fn test_spokes_start_at_top_and_run_clockwise() {
        let (x, y) = spoke_point(0, 4, 10.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);

        let (x, y) = spoke_point(1, 4, 10.0);
        assert!((x - 10.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }
}
