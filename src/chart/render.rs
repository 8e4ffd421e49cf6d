//! The renderer set: one pure function per chart view.
//!
//! Every renderer is total. Empty input gives an empty encoding, and values
//! are passed through unscaled (only angles are derived from them).

use chrono::Weekday;
use std::collections::HashSet;

use super::encoding::*;
use super::view::ChartView;
use crate::models::{day_index, ColorTable, MoodCategory, MoodDistributionEntry, WeeklySeriesPoint};

/// Everything the renderers read
#[derive(Debug, Clone, Copy)]
pub struct ChartData<'a> {
    pub distribution: &'a [MoodDistributionEntry],
    pub weekly: &'a [WeeklySeriesPoint],
}

impl<'a> ChartData<'a> {
    pub fn new(distribution: &'a [MoodDistributionEntry], weekly: &'a [WeeklySeriesPoint]) -> Self {
        Self {
            distribution,
            weekly,
        }
    }

    /// Category colors shared by all five renderers
    pub fn colors(&self) -> ColorTable {
        ColorTable::from_distribution(self.distribution)
    }
}

/// Run the renderer for `view`
pub fn render(view: ChartView, data: &ChartData<'_>) -> ChartEncoding {
    let colors = data.colors();
    match view {
        ChartView::Pie => ChartEncoding::Ring(render_pie(data.distribution, &colors)),
        ChartView::Bar => ChartEncoding::Bars(render_bar(data.distribution, &colors)),
        ChartView::Area => ChartEncoding::StackedArea(render_area(data.weekly, &colors)),
        ChartView::Line => ChartEncoding::Lines(render_line(data.weekly, &colors)),
        ChartView::Radial => ChartEncoding::Radial(render_radial(data.distribution, &colors)),
    }
}

fn legend(entries: &[MoodDistributionEntry], colors: &ColorTable) -> Vec<LegendItem> {
    entries
        .iter()
        .map(|e| LegendItem::new(&e.category, colors.token_for(&e.category)))
        .collect()
}

/// Geometric weight of a share. Negative or non-finite shares draw nothing.
fn weight(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Distribution as a ring: wedge sweep proportional to share, with a fixed
/// gap between non-empty wedges.
pub fn render_pie(distribution: &[MoodDistributionEntry], colors: &ColorTable) -> RingEncoding {
    let total: f64 = distribution.iter().map(|e| weight(e.share)).sum();
    let visible = distribution.iter().filter(|e| weight(e.share) > 0.0).count();
    let padding = if visible > 1 {
        RING_PADDING_DEGREES
    } else {
        0.0
    };
    let available = 360.0 - padding * visible as f64;

    let mut cursor = 0.0;
    let mut wedges = Vec::with_capacity(distribution.len());
    for entry in distribution {
        let sweep = if total > 0.0 {
            weight(entry.share) / total * available
        } else {
            0.0
        };
        wedges.push(Wedge {
            category: entry.category.clone(),
            value: entry.share,
            color_token: colors.token_for(&entry.category),
            start_angle: cursor,
            sweep_angle: sweep,
            tooltip: tooltip_text(entry.category.label(), entry.share),
        });
        if sweep > 0.0 {
            cursor += sweep + padding;
        }
    }

    RingEncoding {
        inner_ratio: RING_INNER_RATIO,
        padding_angle: padding,
        wedges,
        legend: legend(distribution, colors),
    }
}

/// Distribution as bars: one bar per category, height = share
pub fn render_bar(distribution: &[MoodDistributionEntry], colors: &ColorTable) -> BarEncoding {
    let bars: Vec<BarMark> = distribution
        .iter()
        .map(|entry| BarMark {
            category: entry.category.clone(),
            value: entry.share,
            color_token: colors.token_for(&entry.category),
            tooltip: tooltip_text(entry.category.label(), entry.share),
        })
        .collect();
    let y_max = bars.iter().map(|b| weight(b.value)).fold(0.0, f64::max);
    BarEncoding { bars, y_max }
}

/// Weekly series, stacked additively (Happy at the bottom)
pub fn render_area(weekly: &[WeeklySeriesPoint], colors: &ColorTable) -> SeriesEncoding {
    render_series(weekly, colors, true)
}

/// Weekly series, overlaid independently
pub fn render_line(weekly: &[WeeklySeriesPoint], colors: &ColorTable) -> SeriesEncoding {
    render_series(weekly, colors, false)
}

/// Distinct points ordered Monday first. A repeated day keeps its first point.
fn ordered_week(weekly: &[WeeklySeriesPoint]) -> Vec<&WeeklySeriesPoint> {
    let mut seen: HashSet<Weekday> = HashSet::new();
    let mut points: Vec<&WeeklySeriesPoint> =
        weekly.iter().filter(|p| seen.insert(p.day)).collect();
    points.sort_by_key(|p| day_index(p.day));
    points
}

fn render_series(weekly: &[WeeklySeriesPoint], colors: &ColorTable, stacked: bool) -> SeriesEncoding {
    let week = ordered_week(weekly);
    let days: Vec<Weekday> = week.iter().map(|p| p.day).collect();

    let mut series = Vec::new();
    if !week.is_empty() {
        let mut running = vec![0.0; week.len()];
        for category in MoodCategory::TRACKED {
            let points = week
                .iter()
                .zip(running.iter_mut())
                .map(|(point, base_acc)| {
                    let value = point.value(&category);
                    let base = if stacked { *base_acc } else { 0.0 };
                    if stacked {
                        *base_acc += value;
                    }
                    SeriesPoint {
                        day: point.day,
                        value,
                        base,
                        top: base + value,
                        tooltip: tooltip_text(category.label(), value),
                    }
                })
                .collect();
            series.push(Series {
                color_token: colors.token_for(&category),
                category,
                points,
            });
        }
    }

    let y_max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| weight(p.top)))
        .fold(0.0, f64::max);
    let legend = series
        .iter()
        .map(|s| LegendItem::new(&s.category, s.color_token))
        .collect();

    SeriesEncoding {
        stacked,
        days,
        series,
        y_max,
        legend,
    }
}

/// Distribution as concentric arcs, innermost first. Sweep is the share of
/// the full mark; any non-zero share gets at least the minimum sweep.
pub fn render_radial(distribution: &[MoodDistributionEntry], colors: &ColorTable) -> RadialEncoding {
    let count = distribution.len().max(1) as f64;
    let band = (RADIAL_OUTER_RATIO - RADIAL_INNER_RATIO) / count;

    let segments = distribution
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let value = weight(entry.share).min(RADIAL_FULL_MARK);
            let sweep = if value > 0.0 {
                (value / RADIAL_FULL_MARK * 360.0).max(RADIAL_MIN_SWEEP_DEGREES)
            } else {
                0.0
            };
            let inner_radius = RADIAL_INNER_RATIO + band * i as f64;
            RadialSegment {
                category: entry.category.clone(),
                value: entry.share,
                color_token: colors.token_for(&entry.category),
                sweep_angle: sweep,
                inner_radius,
                outer_radius: inner_radius + band,
                tooltip: tooltip_text(entry.category.label(), entry.share),
            }
        })
        .collect();

    RadialEncoding {
        inner_ratio: RADIAL_INNER_RATIO,
        outer_ratio: RADIAL_OUTER_RATIO,
        full_mark: RADIAL_FULL_MARK,
        segments,
        legend: legend(distribution, colors),
    }
}
