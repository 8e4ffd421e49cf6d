//! Helper functions for UI rendering

use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::chart::encoding::LegendItem;
use crate::ui::theme::{base, COLOR_DIM, COLOR_MUTED};

/// Block-character meter, e.g. `████░░░░░░` for 40% at width 10
pub fn meter_spans(percent: u8, width: usize, color: Color) -> Vec<Span<'static>> {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    let empty = width.saturating_sub(filled);
    vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(empty), Style::default().fg(COLOR_DIM)),
    ]
}

/// `■ Happy  ■ Calm ...` legend spans
pub fn legend_spans(items: &[LegendItem]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(items.len() * 3);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("■ ", Style::default().fg(base(item.color_token))));
        spans.push(Span::styled(
            item.label.clone(),
            Style::default().fg(COLOR_MUTED),
        ));
    }
    spans
}

/// Pad or cut `s` to exactly `width` characters
pub fn fit(s: &str, width: usize) -> String {
    let cut: String = s.chars().take(width).collect();
    format!("{:<width$}", cut, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorToken;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_meter_fill() {
        assert_eq!(text(&meter_spans(40, 10, Color::White)), "████░░░░░░");
        assert_eq!(text(&meter_spans(100, 4, Color::White)), "████");
        assert_eq!(text(&meter_spans(0, 3, Color::White)), "░░░");
    }

    #[test]
    fn test_legend() {
        let items = vec![
            LegendItem {
                label: "Happy".to_string(),
                color_token: ColorToken::Emerald,
            },
            LegendItem {
                label: "Calm".to_string(),
                color_token: ColorToken::Blue,
            },
        ];
        assert_eq!(text(&legend_spans(&items)), "■ Happy  ■ Calm");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Energy", 8), "Energy  ");
        assert_eq!(fit("Sleep Quality", 5), "Sleep");
    }
}
