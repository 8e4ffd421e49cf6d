//! Tab Selector Component
//!
//! A horizontal tab selector. Uses a `▶` marker for the selected item with
//! responsive label sizing.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::chart::ChartView;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem<'a> {
    /// Key that selects the tab
    pub key: &'a str,
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(key: &'a str, label: &'a str, short_label: &'a str) -> Self {
        Self {
            key,
            label,
            short_label,
        }
    }
}

const VIEW_KEYS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// One tab per chart view, in selector order
pub fn chart_view_tabs() -> Vec<TabItem<'static>> {
    ChartView::ALL
        .iter()
        .zip(VIEW_KEYS)
        .map(|(view, key)| TabItem::new(key, view.display_name(), view.short_name()))
        .collect()
}

/// Render a horizontal tab selector
///
/// # Arguments
/// * `items` - The tab items to display
/// * `selected` - Index of the currently selected tab
/// * `ctx` - Layout context for responsive sizing
pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    // Leading padding
    spans.push(Span::raw(" "));

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };
        let text = if ctx.is_extra_small() {
            label.to_string()
        } else {
            format!("{} {}", item.key, label)
        };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", style));
            spans.push(Span::styled(text, style));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { " " } else { "   " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
