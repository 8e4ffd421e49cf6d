//! Responsive Layout
//!
//! `LayoutContext` wraps the terminal size and makes the layout decisions;
//! [`DashboardAreas`] is the resulting split of the screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Wide enough for every log column (>= 110 columns)
    pub const FULL_TABLE_WIDTH: u16 = 110;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive decisions.
///
/// # Example
///
/// ```
/// use moodscope::ui::layout::LayoutContext;
///
/// let ctx = LayoutContext::new(70, 30);
/// assert!(ctx.is_compact());
/// assert!(ctx.should_stack_panels());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Less than 80 columns
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: labels are condensed
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Chart and scorecard one above the other instead of side by side
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }

    /// Show role, trigger and shift columns in the log
    pub fn should_show_full_table(&self) -> bool {
        self.width >= breakpoints::FULL_TABLE_WIDTH
    }

    /// Split the screen into header, chart, scorecard, log and footer
    pub fn dashboard_areas(&self, area: Rect) -> DashboardAreas {
        let [header, body, log, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Percentage(55),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .areas(area);

        let (chart, scorecard) = if self.should_stack_panels() {
            let [chart, scorecard] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body);
            (chart, scorecard)
        } else {
            let [chart, scorecard] = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body);
            (chart, scorecard)
        };

        DashboardAreas {
            header,
            chart,
            scorecard,
            log,
            footer,
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(120, 40)
    }
}

/// Screen regions of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub header: Rect,
    pub chart: Rect,
    pub scorecard: Rect,
    pub log: Rect,
    pub footer: Rect,
}
