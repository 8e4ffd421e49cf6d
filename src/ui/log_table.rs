//! Mood log table
//!
//! One row per observation in the table's sort order. The selected row's
//! full notes are shown under the table when the cell had to be cut.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::table::{MoodLogRow, MoodLogTable};
use crate::ui::helpers::meter_spans;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{
    base, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_MUTED, COLOR_ROW_HIGHLIGHT,
};

const INTENSITY_METER_WIDTH: usize = 5;

/// Column headers for the current width
pub fn column_titles(ctx: &LayoutContext) -> Vec<&'static str> {
    if ctx.should_show_full_table() {
        vec!["When", "Subject", "Role", "Mood", "Intensity", "Shift", "Trigger", "Notes"]
    } else {
        vec!["When", "Subject", "Mood", "Intensity", "Notes"]
    }
}

fn column_widths(ctx: &LayoutContext) -> Vec<Constraint> {
    if ctx.should_show_full_table() {
        vec![
            Constraint::Length(22),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(5),
            Constraint::Length(14),
            Constraint::Min(10),
        ]
    } else {
        vec![
            Constraint::Length(22),
            Constraint::Length(14),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Min(8),
        ]
    }
}

fn mood_badge(row: &MoodLogRow) -> Span<'static> {
    Span::styled(
        format!(" {} ", row.mood.label()),
        Style::default()
            .fg(Color::Black)
            .bg(base(row.badge_token))
            .add_modifier(Modifier::BOLD),
    )
}

fn intensity_cell(row: &MoodLogRow) -> Line<'static> {
    let mut spans = meter_spans(row.fill_percent, INTENSITY_METER_WIDTH, base(row.badge_token));
    spans.push(Span::styled(
        format!(" {}", row.intensity_label),
        Style::default().fg(COLOR_MUTED),
    ));
    Line::from(spans)
}

fn table_row(row: &MoodLogRow, ctx: &LayoutContext) -> Row<'static> {
    let shift = Span::styled(row.shift_glyph, Style::default().fg(base(row.shift_token)));
    let cells: Vec<Cell<'static>> = if ctx.should_show_full_table() {
        vec![
            Cell::from(row.when.clone()),
            Cell::from(row.subject.clone()),
            Cell::from(Span::styled(row.role.clone(), Style::default().fg(COLOR_MUTED))),
            Cell::from(mood_badge(row)),
            Cell::from(intensity_cell(row)),
            Cell::from(shift),
            Cell::from(row.trigger.clone()),
            Cell::from(Span::styled(row.notes.clone(), Style::default().fg(COLOR_MUTED))),
        ]
    } else {
        vec![
            Cell::from(row.when.clone()),
            Cell::from(row.subject.clone()),
            Cell::from(mood_badge(row)),
            Cell::from(intensity_cell(row)),
            Cell::from(Span::styled(row.notes.clone(), Style::default().fg(COLOR_MUTED))),
        ]
    };
    Row::new(cells)
}

/// Full notes of the selected row, when they were truncated in the cell
pub fn detail_line(table: &MoodLogTable, selected: usize) -> Option<Line<'static>> {
    let row = table.rows.get(selected)?;
    if !row.is_truncated() {
        return None;
    }
    Some(Line::from(vec![
        Span::styled(format!("{}: ", row.subject), Style::default().fg(COLOR_HEADER)),
        Span::styled(row.notes_full.clone(), Style::default().fg(COLOR_MUTED)),
    ]))
}

pub fn render_log_table(
    frame: &mut Frame,
    area: Rect,
    table: &MoodLogTable,
    selected: usize,
    ctx: &LayoutContext,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(vec![
            Span::styled(
                " Mood Log ",
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("· {} · {} entries ", table.sort.display_name(), table.len()),
                Style::default().fg(COLOR_MUTED),
            ),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if table.is_empty() {
        frame.render_widget(
            Paragraph::new("No mood entries").style(Style::default().fg(COLOR_DIM)),
            inner,
        );
        return;
    }

    let detail = detail_line(table, selected);
    let [table_area, detail_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(2),
            Constraint::Length(if detail.is_some() { 1 } else { 0 }),
        ])
        .areas(inner);

    let header = Row::new(column_titles(ctx)).style(
        Style::default()
            .fg(COLOR_MUTED)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = table.rows.iter().map(|row| table_row(row, ctx)).collect();
    let widget = Table::new(rows, column_widths(ctx))
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(COLOR_ROW_HIGHLIGHT))
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(selected.min(table.len() - 1)));
    frame.render_stateful_widget(widget, table_area, &mut state);

    if let Some(line) = detail {
        frame.render_widget(Paragraph::new(line), detail_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocalTime, MoodCategory, MoodObservation};
    use crate::table::LogSort;
    use chrono::NaiveDate;

    fn observation(id: &str, notes: &str) -> MoodObservation {
        MoodObservation::new(
            id,
            NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
            LocalTime::parse("2:30 PM IST").unwrap(),
            MoodCategory::Happy,
            8,
        )
        .with_subject("Sarah Johnson", "Student")
        .with_notes(notes)
    }

    #[test]
    fn test_full_table_adds_columns() {
        assert_eq!(column_titles(&LayoutContext::new(120, 40)).len(), 8);
        assert_eq!(column_titles(&LayoutContext::new(90, 40)).len(), 5);
        assert_eq!(column_widths(&LayoutContext::new(90, 40)).len(), 5);
    }

    #[test]
    fn test_intensity_cell() {
        let table = MoodLogTable::build(&[observation("1", "ok")], LogSort::Newest, 32);
        let line = intensity_cell(&table.rows[0]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "████░ 8/10");
    }

    #[test]
    fn test_detail_only_for_truncated_notes() {
        let long = "Finished the group project and presented it to the whole class";
        let table = MoodLogTable::build(
            &[observation("1", long), observation("2", "short")],
            LogSort::Newest,
            16,
        );
        let truncated = table.rows.iter().position(|r| r.id == "1").unwrap();
        let plain = table.rows.iter().position(|r| r.id == "2").unwrap();
        assert!(detail_line(&table, truncated).is_some());
        assert!(detail_line(&table, plain).is_none());
        assert!(detail_line(&table, 99).is_none());
    }
}
