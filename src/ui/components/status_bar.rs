//! Status bar: key hints on the left, diagnostics on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_WARNING};

/// Key hints sized to the terminal
pub fn footer_hint(ctx: &LayoutContext) -> &'static str {
    if ctx.is_extra_small() {
        "q quit  1-5 view  s sort"
    } else {
        "q quit  1-5 view  ←/→ cycle  s sort  ↑/↓ row"
    }
}

/// Right-hand diagnostics: a rejected action wins, then defect counts
pub fn diagnostics_line(
    status: Option<&str>,
    excluded: usize,
    warnings: usize,
) -> Line<'static> {
    if let Some(message) = status {
        return Line::from(Span::styled(
            format!("✕ {} ", message),
            Style::default().fg(COLOR_ERROR),
        ));
    }

    let style = |count: usize| {
        if count > 0 {
            Style::default().fg(COLOR_WARNING)
        } else {
            Style::default().fg(COLOR_DIM)
        }
    };
    Line::from(vec![
        Span::styled(format!("excluded {} ", excluded), style(excluded)),
        Span::styled(format!(" warnings {} ", warnings), style(warnings)),
    ])
}

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    status: Option<&str>,
    excluded: usize,
    warnings: usize,
) {
    let [left, right] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(area);

    frame.render_widget(
        Line::styled(format!(" {}", footer_hint(ctx)), Style::default().fg(COLOR_DIM)),
        left,
    );
    frame.render_widget(
        Paragraph::new(diagnostics_line(status, excluded, warnings)).alignment(Alignment::Right),
        right,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_counts_shown() {
        let line = diagnostics_line(None, 2, 1);
        assert_eq!(text(&line), "excluded 2  warnings 1 ");
        assert_eq!(line.spans[0].style.fg, Some(COLOR_WARNING));
    }

    #[test]
    fn test_status_takes_precedence() {
        let line = diagnostics_line(Some("unknown chart view `x`"), 2, 1);
        assert!(text(&line).contains("unknown chart view"));
    }

    #[test]
    fn test_hint_shortens_when_tiny() {
        assert!(footer_hint(&LayoutContext::new(40, 10)).len() < footer_hint(&LayoutContext::default()).len());
    }
}
