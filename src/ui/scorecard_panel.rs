//! Wellness scorecard panel

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::analytics::{EngagementRow, MetricRow, Scorecard};
use crate::models::StreakCounters;
use crate::ui::helpers::{fit, meter_spans};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{
    band_color, base, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_MUTED, COLOR_WARNING,
};

const LABEL_WIDTH: usize = 16;

fn meter_width(ctx: &LayoutContext) -> usize {
    if ctx.is_extra_small() {
        6
    } else if ctx.is_compact() {
        10
    } else {
        14
    }
}

fn overall_line(scorecard: &Scorecard) -> Line<'static> {
    match (scorecard.overall, scorecard.overall_band) {
        (Some(score), Some(band)) => Line::from(vec![
            Span::styled("Overall ", Style::default().fg(COLOR_MUTED)),
            Span::styled(
                format!("{}", score),
                Style::default()
                    .fg(band_color(band))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("/100  ", Style::default().fg(COLOR_DIM)),
            Span::styled(band.display_name(), Style::default().fg(band_color(band))),
        ]),
        _ => Line::from(vec![
            Span::styled("Overall ", Style::default().fg(COLOR_MUTED)),
            Span::styled("n/a", Style::default().fg(COLOR_DIM)),
        ]),
    }
}

fn metric_line(row: &MetricRow, width: usize) -> Line<'static> {
    let color = band_color(row.band);
    let mut spans = vec![Span::styled(
        fit(&row.label, LABEL_WIDTH),
        Style::default().fg(COLOR_MUTED),
    )];
    spans.extend(meter_spans(row.fill_percent, width, color));
    spans.push(Span::styled(
        format!(" {:>3}", row.score),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!(" {}", row.trend_glyph),
        Style::default().fg(base(row.trend_token)),
    ));
    if let Some(delta) = &row.delta_label {
        spans.push(Span::styled(
            format!(" {}", delta),
            Style::default().fg(base(row.trend_token)),
        ));
    }
    Line::from(spans)
}

fn streak_line(streaks: StreakCounters) -> Line<'static> {
    let value = |n: i64| Span::styled(n.to_string(), Style::default().add_modifier(Modifier::BOLD));
    let label = |s: &'static str| Span::styled(s, Style::default().fg(COLOR_MUTED));
    let mut spans = vec![
        label("Streak "),
        value(streaks.current),
        label("  best "),
        value(streaks.longest),
        label("  week "),
        value(streaks.this_week),
        label("  month "),
        value(streaks.this_month),
    ];
    if !streaks.is_consistent() {
        spans.push(Span::styled(" !", Style::default().fg(COLOR_WARNING)));
    }
    Line::from(spans)
}

fn engagement_line(row: &EngagementRow, width: usize) -> Line<'static> {
    let color = COLOR_HEADER;
    let mut spans = vec![Span::styled(
        fit(&row.title, LABEL_WIDTH),
        Style::default().fg(COLOR_MUTED),
    )];
    spans.extend(meter_spans(row.progress, width, color));
    spans.push(Span::styled(
        format!(" {:>3}%", row.progress),
        Style::default().fg(color),
    ));
    spans.push(Span::styled(
        format!(" {}", row.value_label),
        Style::default().fg(COLOR_DIM),
    ));
    Line::from(spans)
}

/// All scorecard lines, top to bottom
pub fn scorecard_lines(scorecard: &Scorecard, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let width = meter_width(ctx);
    let mut lines = vec![overall_line(scorecard), Line::from("")];
    lines.extend(scorecard.metrics.iter().map(|row| metric_line(row, width)));
    lines.push(Line::from(""));
    lines.push(streak_line(scorecard.streaks));
    if !scorecard.engagement.is_empty() {
        lines.push(Line::from(""));
        lines.extend(
            scorecard
                .engagement
                .iter()
                .map(|row| engagement_line(row, width)),
        );
    }
    lines
}

pub fn render_scorecard_panel(
    frame: &mut Frame,
    area: Rect,
    scorecard: &Scorecard,
    ctx: &LayoutContext,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Wellness ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(
        Paragraph::new(scorecard_lines(scorecard, ctx)).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EngagementStat, WellnessMetric};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn scorecard() -> Scorecard {
        Scorecard::compute(
            &[WellnessMetric::new("Sleep Quality", 78).with_trend(crate::models::Trend::Down, 3)],
            StreakCounters::new(5, 12, 4, 18),
            &[EngagementStat::new("Check-ins", 12.0, 14.0)],
        )
    }

    #[test]
    fn test_overall_and_metric_lines() {
        let lines = scorecard_lines(&scorecard(), &LayoutContext::default());
        assert_eq!(text(&lines[0]), "Overall 78/100  Good");
        let metric = text(&lines[2]);
        assert!(metric.starts_with("Sleep Quality"));
        assert!(metric.contains(" 78 ▼ +3%"));
    }

    #[test]
    fn test_streaks_and_engagement() {
        let lines = scorecard_lines(&scorecard(), &LayoutContext::default());
        let all: Vec<String> = lines.iter().map(text).collect();
        assert!(all.iter().any(|l| l == "Streak 5  best 12  week 4  month 18"));
        assert!(all.iter().any(|l| l.contains(" 86% 12/14")));
    }

    #[test]
    fn test_empty_metrics_show_na() {
        let card = Scorecard::compute(&[], StreakCounters::default(), &[]);
        assert_eq!(text(&overall_line(&card)), "Overall n/a");
    }
}
