//! Drawable chart encodings
//!
//! An encoding is what a renderer hands to the display: geometry in
//! viewport-independent units (degrees, radius ratios, data values), a color
//! token per mark and the label/value pairs for tooltips and legends. Values
//! are carried verbatim from the data model.

use chrono::Weekday;
use serde::Serialize;

use crate::models::{ColorToken, MoodCategory};

/// Inner:outer radius of the pie ring (30 / 80)
pub const RING_INNER_RATIO: f64 = 0.375;
/// Gap between adjacent ring wedges, in degrees
pub const RING_PADDING_DEGREES: f64 = 2.0;
/// Radial chart inner radius, as a fraction of the viewport radius
pub const RADIAL_INNER_RATIO: f64 = 0.1;
/// Radial chart outer radius, as a fraction of the viewport radius
pub const RADIAL_OUTER_RATIO: f64 = 0.9;
/// Value drawn as a full circle on the radial chart
pub const RADIAL_FULL_MARK: f64 = 100.0;
/// Smallest arc drawn for a non-zero radial value, in degrees
pub const RADIAL_MIN_SWEEP_DEGREES: f64 = 15.0;

/// Tooltip/legend number format: the value as given, with a `%` suffix
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Tooltip text for one mark, e.g. `Happy: 35%`
pub fn tooltip_text(label: &str, value: f64) -> String {
    format!("{}: {}", label, format_percent(value))
}

/// One legend row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendItem {
    pub label: String,
    pub color_token: ColorToken,
}

impl LegendItem {
    pub fn new(category: &MoodCategory, color_token: ColorToken) -> Self {
        Self {
            label: category.label().to_string(),
            color_token,
        }
    }
}

// ============================================================================
// Ring (pie)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wedge {
    pub category: MoodCategory,
    pub value: f64,
    pub color_token: ColorToken,
    /// Degrees clockwise from twelve o'clock
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub tooltip: String,
}

impl Wedge {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingEncoding {
    pub inner_ratio: f64,
    pub padding_angle: f64,
    pub wedges: Vec<Wedge>,
    pub legend: Vec<LegendItem>,
}

// ============================================================================
// Bars
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMark {
    pub category: MoodCategory,
    /// Bar height, equal to the category share
    pub value: f64,
    pub color_token: ColorToken,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarEncoding {
    pub bars: Vec<BarMark>,
    /// Top of the value axis
    pub y_max: f64,
}

// ============================================================================
// Weekly series (area / line)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub day: Weekday,
    /// The category's own value for the day
    pub value: f64,
    /// Bottom of the band; 0 unless stacked
    pub base: f64,
    /// Drawn height: `base + value`
    pub top: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub category: MoodCategory,
    pub color_token: ColorToken,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesEncoding {
    pub stacked: bool,
    /// X axis, Monday first
    pub days: Vec<Weekday>,
    pub series: Vec<Series>,
    /// Largest drawn `top`
    pub y_max: f64,
    pub legend: Vec<LegendItem>,
}

// ============================================================================
// Radial
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialSegment {
    pub category: MoodCategory,
    pub value: f64,
    pub color_token: ColorToken,
    /// Degrees clockwise from twelve o'clock
    pub sweep_angle: f64,
    /// Band radii, as fractions of the viewport radius
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialEncoding {
    pub inner_ratio: f64,
    pub outer_ratio: f64,
    pub full_mark: f64,
    pub segments: Vec<RadialSegment>,
    pub legend: Vec<LegendItem>,
}

// ============================================================================
// Encoding
// ============================================================================

/// Output of one renderer. One variant per chart view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartEncoding {
    Ring(RingEncoding),
    Bars(BarEncoding),
    StackedArea(SeriesEncoding),
    Lines(SeriesEncoding),
    Radial(RadialEncoding),
}

impl ChartEncoding {
    /// True when the encoding has no category or series to draw
    pub fn is_empty(&self) -> bool {
        match self {
            ChartEncoding::Ring(ring) => ring.wedges.is_empty(),
            ChartEncoding::Bars(bars) => bars.bars.is_empty(),
            ChartEncoding::StackedArea(series) | ChartEncoding::Lines(series) => {
                series.days.is_empty()
            }
            ChartEncoding::Radial(radial) => radial.segments.is_empty(),
        }
    }

    /// Color token assigned to each category, in drawing order
    pub fn category_tokens(&self) -> Vec<(MoodCategory, ColorToken)> {
        match self {
            ChartEncoding::Ring(ring) => ring
                .wedges
                .iter()
                .map(|w| (w.category.clone(), w.color_token))
                .collect(),
            ChartEncoding::Bars(bars) => bars
                .bars
                .iter()
                .map(|b| (b.category.clone(), b.color_token))
                .collect(),
            ChartEncoding::StackedArea(series) | ChartEncoding::Lines(series) => series
                .series
                .iter()
                .map(|s| (s.category.clone(), s.color_token))
                .collect(),
            ChartEncoding::Radial(radial) => radial
                .segments
                .iter()
                .map(|s| (s.category.clone(), s.color_token))
                .collect(),
        }
    }

    /// All tooltip texts, in drawing order
    pub fn tooltips(&self) -> Vec<&str> {
        match self {
            ChartEncoding::Ring(ring) => ring.wedges.iter().map(|w| w.tooltip.as_str()).collect(),
            ChartEncoding::Bars(bars) => bars.bars.iter().map(|b| b.tooltip.as_str()).collect(),
            ChartEncoding::StackedArea(series) | ChartEncoding::Lines(series) => series
                .series
                .iter()
                .flat_map(|s| s.points.iter().map(|p| p.tooltip.as_str()))
                .collect(),
            ChartEncoding::Radial(radial) => radial
                .segments
                .iter()
                .map(|s| s.tooltip.as_str())
                .collect(),
        }
    }
}
