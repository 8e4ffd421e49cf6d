//! Chart panel
//!
//! Draws one [`ChartFrame`]. The panel is cleared first, so nothing of a
//! previously active view survives a transition.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Clear, Dataset,
        GraphType, Paragraph,
    },
    Frame,
};

use crate::chart::encoding::{BarEncoding, RadialEncoding, RingEncoding, SeriesEncoding};
use crate::chart::{format_percent, ChartEncoding, ChartFrame, LegendItem};
use crate::models::{ColorToken, Tone};
use crate::ui::helpers::legend_spans;
use crate::ui::theme::{base, token_color, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_MUTED};

/// Angular step when filling arcs, in degrees
const ARC_STEP_DEGREES: f64 = 0.75;

pub fn render_chart_panel(frame: &mut Frame, area: Rect, chart: &ChartFrame) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(vec![
            Span::styled(" Mood Analytics ", Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)),
            Span::styled(format!("· {} ", chart.view), Style::default().fg(COLOR_MUTED)),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 || inner.width < 6 {
        return;
    }

    if chart.encoding.is_empty() {
        frame.render_widget(
            Paragraph::new("No data for this view")
                .style(Style::default().fg(COLOR_DIM))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let [plot, legend] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(inner);

    match &chart.encoding {
        ChartEncoding::Ring(ring) => draw_ring(frame, plot, ring),
        ChartEncoding::Bars(bars) => draw_bars(frame, plot, bars),
        ChartEncoding::StackedArea(series) | ChartEncoding::Lines(series) => {
            draw_series(frame, plot, series)
        }
        ChartEncoding::Radial(radial) => draw_radial(frame, plot, radial),
    }

    frame.render_widget(
        Paragraph::new(legend_line(&chart.encoding)).alignment(Alignment::Center),
        legend,
    );
}

/// Legend with the tooltip values where the view has one value per category
fn legend_line(encoding: &ChartEncoding) -> Line<'static> {
    let with_values = |marks: Vec<(ColorToken, String)>| {
        let mut spans = Vec::new();
        for (i, (token, text)) in marks.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("■ ", Style::default().fg(base(token))));
            spans.push(Span::styled(text, Style::default().fg(COLOR_MUTED)));
        }
        Line::from(spans)
    };

    match encoding {
        ChartEncoding::Ring(ring) => with_values(
            ring.wedges
                .iter()
                .map(|w| (w.color_token, w.tooltip.clone()))
                .collect(),
        ),
        ChartEncoding::Bars(bars) => with_values(
            bars.bars
                .iter()
                .map(|b| (b.color_token, b.tooltip.clone()))
                .collect(),
        ),
        ChartEncoding::Radial(radial) => with_values(
            radial
                .segments
                .iter()
                .map(|s| (s.color_token, s.tooltip.clone()))
                .collect(),
        ),
        ChartEncoding::StackedArea(series) | ChartEncoding::Lines(series) => {
            series_legend(&series.legend, series.stacked)
        }
    }
}

fn series_legend(items: &[LegendItem], stacked: bool) -> Line<'static> {
    let mut spans = legend_spans(items);
    if stacked {
        spans.push(Span::styled("  (stacked)", Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

// ============================================================================
// Polar views
// ============================================================================

/// Canvas bounds that keep a unit circle round in terminal cells
/// (a cell is about twice as tall as it is wide).
fn polar_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let half_height = 1.05;
    let aspect = f64::from(area.width) / (2.0 * f64::from(area.height.max(1)));
    let half_width = (half_height * aspect).max(half_height);
    ([-half_width, half_width], [-half_height, half_height])
}

/// Point on a circle; angles run clockwise from twelve o'clock
fn polar(radius: f64, degrees: f64) -> (f64, f64) {
    let theta = degrees.to_radians();
    (radius * theta.sin(), radius * theta.cos())
}

/// Dots filling the band `inner..outer` over `start..start + sweep`
fn arc_band(inner: f64, outer: f64, start: f64, sweep: f64, radial_step: f64) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    if sweep <= 0.0 || outer <= inner {
        return coords;
    }
    let mut angle = start;
    let end = start + sweep;
    while angle <= end {
        let mut radius = inner;
        while radius <= outer {
            coords.push(polar(radius, angle));
            radius += radial_step;
        }
        angle += ARC_STEP_DEGREES;
    }
    coords
}

fn radial_step(area: Rect) -> f64 {
    // One Braille dot row is a quarter cell
    2.1 / (f64::from(area.height.max(1)) * 4.0)
}

fn draw_ring(frame: &mut Frame, area: Rect, ring: &RingEncoding) {
    let (x_bounds, y_bounds) = polar_bounds(area);
    let step = radial_step(area);
    let layers: Vec<(Color, Vec<(f64, f64)>)> = ring
        .wedges
        .iter()
        .map(|w| {
            (
                base(w.color_token),
                arc_band(ring.inner_ratio, 1.0, w.start_angle, w.sweep_angle, step),
            )
        })
        .collect();
    let labels: Vec<(f64, f64, String, Color)> = ring
        .wedges
        .iter()
        .filter(|w| w.sweep_angle >= 18.0)
        .map(|w| {
            let (x, y) = polar((1.0 + ring.inner_ratio) / 2.0, w.start_angle + w.sweep_angle / 2.0);
            (x, y, format_percent(w.value), token_color(w.color_token, Tone::Highlight))
        })
        .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            for (color, coords) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
            ctx.layer();
            for (x, y, text, color) in &labels {
                ctx.print(
                    *x,
                    *y,
                    Span::styled(text.clone(), Style::default().fg(*color).add_modifier(Modifier::BOLD)),
                );
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_radial(frame: &mut Frame, area: Rect, radial: &RadialEncoding) {
    let (x_bounds, y_bounds) = polar_bounds(area);
    let step = radial_step(area);
    let track = token_color(ColorToken::Slate, Tone::Muted);

    let mut layers: Vec<(Color, Vec<(f64, f64)>)> = Vec::new();
    for segment in &radial.segments {
        let gap = (segment.outer_radius - segment.inner_radius) * 0.15;
        let inner = segment.inner_radius + gap;
        let outer = segment.outer_radius - gap;
        layers.push((track, arc_band(inner, outer, 0.0, 360.0, step)));
        layers.push((
            base(segment.color_token),
            arc_band(inner, outer, 0.0, segment.sweep_angle, step),
        ));
    }

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            for (color, coords) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });
    frame.render_widget(canvas, area);
}

// ============================================================================
// Bars
// ============================================================================

fn draw_bars(frame: &mut Frame, area: Rect, encoding: &BarEncoding) {
    let count = encoding.bars.len().max(1) as u16;
    let gap = 2;
    let bar_width = (area.width.saturating_sub(gap * (count - 1)) / count).clamp(3, 12);

    let bars: Vec<Bar> = encoding
        .bars
        .iter()
        .map(|mark| {
            let color = base(mark.color_token);
            Bar::default()
                .value(mark.value.max(0.0).round() as u64)
                .text_value(format_percent(mark.value))
                .label(Line::from(mark.category.label().to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .max(nice_max(encoding.y_max) as u64);
    frame.render_widget(chart, area);
}

// ============================================================================
// Weekly series
// ============================================================================

/// Axis top rounded up to a multiple of 10 (at least 10)
fn nice_max(value: f64) -> f64 {
    ((value / 10.0).ceil() * 10.0).max(10.0)
}

/// Horizontal spacing of fill dots, in day units
const FILL_X_STEP: f64 = 0.05;

/// Linear interpolation of the stacked band, as dots, clipped to
/// `0..=ceiling`. Columns with a non-finite edge are skipped.
fn band_fill(
    base_line: &[(f64, f64)],
    top_line: &[(f64, f64)],
    y_step: f64,
    ceiling: f64,
) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    if !(y_step.is_finite() && y_step > 0.0 && ceiling.is_finite()) {
        return coords;
    }
    for (lower, upper) in base_line.windows(2).zip(top_line.windows(2)) {
        let (x0, b0) = lower[0];
        let (x1, b1) = lower[1];
        let t0 = upper[0].1;
        let t1 = upper[1].1;
        let columns = ((x1 - x0) / FILL_X_STEP).round().max(0.0) as usize;
        for column in 0..=columns {
            let x = x0 + column as f64 * FILL_X_STEP;
            let t = if columns > 0 { column as f64 / columns as f64 } else { 0.0 };
            let bottom = b0 + (b1 - b0) * t;
            let top = t0 + (t1 - t0) * t;
            if !(bottom.is_finite() && top.is_finite()) {
                continue;
            }
            let bottom = bottom.clamp(0.0, ceiling);
            let top = top.clamp(0.0, ceiling);
            let rows = ((top - bottom) / y_step).ceil().max(0.0) as usize;
            coords.extend((0..rows).map(|row| (x, bottom + row as f64 * y_step)));
        }
    }
    coords
}

fn draw_series(frame: &mut Frame, area: Rect, encoding: &SeriesEncoding) {
    let y_max = nice_max(encoding.y_max);
    let x_max = encoding.days.len().saturating_sub(1).max(1) as f64;
    let y_step = y_max / (f64::from(area.height.max(1)) * 4.0);

    let lines: Vec<(Color, Vec<(f64, f64)>)> = encoding
        .series
        .iter()
        .map(|s| {
            let coords = s
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, p.top))
                .collect();
            (base(s.color_token), coords)
        })
        .collect();

    let fills: Vec<(Color, Vec<(f64, f64)>)> = if encoding.stacked {
        encoding
            .series
            .iter()
            .map(|s| {
                let bottom: Vec<(f64, f64)> =
                    s.points.iter().enumerate().map(|(i, p)| (i as f64, p.base)).collect();
                let top: Vec<(f64, f64)> =
                    s.points.iter().enumerate().map(|(i, p)| (i as f64, p.top)).collect();
                (
                    token_color(s.color_token, Tone::Muted),
                    band_fill(&bottom, &top, y_step, y_max),
                )
            })
            .collect()
    } else {
        Vec::new()
    };

    let mut datasets: Vec<Dataset> = fills
        .iter()
        .map(|(color, coords)| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(*color))
                .data(coords)
        })
        .collect();
    datasets.extend(lines.iter().map(|(color, coords)| {
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(*color))
            .data(coords)
    }));

    let day_labels: Vec<Line> = encoding
        .days
        .iter()
        .map(|d| Line::from(d.to_string()))
        .collect();
    let y_labels = vec![
        Line::from("0%"),
        Line::from(format_percent(y_max / 2.0)),
        Line::from(format_percent(y_max)),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_DIM))
                .bounds([0.0, x_max])
                .labels(day_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_DIM))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_clockwise_from_top() {
        let (x, y) = polar(1.0, 0.0);
        assert!(x.abs() < 1e-9 && (y - 1.0).abs() < 1e-9);
        let (x, y) = polar(1.0, 90.0);
        assert!((x - 1.0).abs() < 1e-9 && y.abs() < 1e-9);
    }

    #[test]
    fn test_arc_band_empty_for_zero_sweep() {
        assert!(arc_band(0.3, 1.0, 0.0, 0.0, 0.1).is_empty());
        assert!(!arc_band(0.3, 1.0, 0.0, 10.0, 0.1).is_empty());
    }

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(77.0), 80.0);
        assert_eq!(nice_max(0.0), 10.0);
        assert_eq!(nice_max(100.0), 100.0);
    }

    #[test]
    fn test_band_fill_stays_inside() {
        let bottom = vec![(0.0, 10.0), (1.0, 20.0)];
        let top = vec![(0.0, 30.0), (1.0, 40.0)];
        let dots = band_fill(&bottom, &top, 1.0, 100.0);
        assert!(!dots.is_empty());
        assert!(dots.iter().all(|&(x, y)| {
            let lo = 10.0 + 10.0 * x;
            y >= lo - 1e-9 && y < lo + 20.0 + 1e-9
        }));
    }

    #[test]
    fn test_band_fill_skips_overflowed_columns() {
        let bottom = vec![(0.0, 1e308), (1.0, 0.0)];
        let top = vec![(0.0, f64::INFINITY), (1.0, 10.0)];
        let dots = band_fill(&bottom, &top, 0.5, 10.0);
        assert!(dots.iter().all(|&(_, y)| y.is_finite() && (0.0..=10.0).contains(&y)));
        assert!(dots.iter().all(|&(x, _)| x > 0.0));
    }

    #[test]
    fn test_band_fill_clips_values_above_the_axis() {
        let bottom = vec![(0.0, 1e20), (1.0, 1e20)];
        let top = vec![(0.0, 2e20), (1.0, 2e20)];
        let dots = band_fill(&bottom, &top, 0.25, 100.0);
        assert!(dots.is_empty());
    }
}
