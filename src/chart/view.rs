//! The five chart views

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SelectionError;

/// Which renderer the chart panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartView {
    /// Distribution as a ring
    #[default]
    Pie,
    /// Distribution as one bar per category
    Bar,
    /// Weekly series, stacked
    Area,
    /// Weekly series, overlaid
    Line,
    /// Distribution as concentric arcs
    Radial,
}

impl ChartView {
    /// All views in selector order
    pub const ALL: [ChartView; 5] = [
        ChartView::Pie,
        ChartView::Bar,
        ChartView::Area,
        ChartView::Line,
        ChartView::Radial,
    ];

    /// Get the display name for this view
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartView::Pie => "Pie",
            ChartView::Bar => "Bar",
            ChartView::Area => "Area",
            ChartView::Line => "Line",
            ChartView::Radial => "Radial",
        }
    }

    /// Lowercase name, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartView::Pie => "pie",
            ChartView::Bar => "bar",
            ChartView::Area => "area",
            ChartView::Line => "line",
            ChartView::Radial => "radial",
        }
    }

    /// One-letter label for narrow selectors
    pub fn short_name(&self) -> &'static str {
        match self {
            ChartView::Pie => "P",
            ChartView::Bar => "B",
            ChartView::Area => "A",
            ChartView::Line => "L",
            ChartView::Radial => "R",
        }
    }

    /// 1-based position in the selector
    pub fn number(&self) -> usize {
        match self {
            ChartView::Pie => 1,
            ChartView::Bar => 2,
            ChartView::Area => 3,
            ChartView::Line => 4,
            ChartView::Radial => 5,
        }
    }

    /// View at a 1-based selector position
    pub fn from_number(number: usize) -> Result<Self, SelectionError> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .ok_or(SelectionError::IndexOutOfRange { index: number })
    }

    /// Cycle to the next view
    pub fn next(&self) -> Self {
        match self {
            ChartView::Pie => ChartView::Bar,
            ChartView::Bar => ChartView::Area,
            ChartView::Area => ChartView::Line,
            ChartView::Line => ChartView::Radial,
            ChartView::Radial => ChartView::Pie,
        }
    }

    /// Cycle to the previous view
    pub fn prev(&self) -> Self {
        match self {
            ChartView::Pie => ChartView::Radial,
            ChartView::Bar => ChartView::Pie,
            ChartView::Area => ChartView::Bar,
            ChartView::Line => ChartView::Area,
            ChartView::Radial => ChartView::Line,
        }
    }

    /// Whether the view draws the weekly series rather than the distribution
    pub fn uses_weekly_series(&self) -> bool {
        matches!(self, ChartView::Area | ChartView::Line)
    }
}

impl fmt::Display for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ChartView {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SelectionError::UnknownView {
                payload: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pie() {
        assert_eq!(ChartView::default(), ChartView::Pie);
    }

    #[test]
    fn test_next_prev_cycle() {
        for view in ChartView::ALL {
            assert_eq!(view.next().prev(), view);
        }
        assert_eq!(ChartView::Radial.next(), ChartView::Pie);
        assert_eq!(ChartView::Pie.prev(), ChartView::Radial);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("radial".parse::<ChartView>().unwrap(), ChartView::Radial);
        assert_eq!(" Bar ".parse::<ChartView>().unwrap(), ChartView::Bar);
        assert_eq!(
            "donut".parse::<ChartView>().unwrap_err(),
            SelectionError::UnknownView {
                payload: "donut".to_string()
            }
        );
    }

    #[test]
    fn test_numbers_round_trip() {
        for view in ChartView::ALL {
            assert_eq!(ChartView::from_number(view.number()).unwrap(), view);
        }
        assert!(ChartView::from_number(0).is_err());
        assert!(ChartView::from_number(6).is_err());
    }
}
