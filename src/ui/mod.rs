//! UI rendering for the mood dashboard
//!
//! One screen, laid out by [`LayoutContext::dashboard_areas`]:
//! - Header: title and the chart view selector
//! - Chart panel and wellness scorecard, side by side or stacked
//! - Mood log table
//! - Footer: key hints and diagnostics
//!
//! Render functions only read [`App`]; all state changes go through the
//! key handlers.

mod chart_panel;
pub mod components;
mod helpers;
pub mod layout;
mod log_table;
mod scorecard_panel;
pub mod theme;

pub use chart_panel::render_chart_panel;
pub use layout::{breakpoints, DashboardAreas, LayoutContext};
pub use log_table::{column_titles, detail_line, render_log_table};
pub use scorecard_panel::{render_scorecard_panel, scorecard_lines};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use components::{chart_view_tabs, render_status_bar, render_tab_selector};
use theme::{COLOR_DIM, COLOR_HEADER};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Draw the whole dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let areas = ctx.dashboard_areas(area);

    render_header(frame, areas.header, app, &ctx);
    render_chart_panel(frame, areas.chart, app.frame());
    render_scorecard_panel(frame, areas.scorecard, app.scorecard(), &ctx);
    render_log_table(frame, areas.log, app.table(), app.selected_row, &ctx);
    render_status_bar(
        frame,
        areas.footer,
        &ctx,
        app.status.as_deref(),
        app.defect_count(),
        app.warnings().len(),
    );
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let selected = app.active_view().number() - 1;
    let title = Line::from(vec![
        Span::styled(
            " moodscope",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} entries", app.store().observations().len()),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    let tabs = render_tab_selector(&chart_view_tabs(), selected, ctx);
    frame.render_widget(Paragraph::new(vec![title, tabs]), area);
}
