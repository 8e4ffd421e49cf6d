// Dashboard rendering tests against ratatui's TestBackend
// Drives the app through key events and checks what reaches the screen at
// several terminal sizes.

mod common;

use chrono::Weekday;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use moodscope::app::App;
use moodscope::chart::ChartView;
use moodscope::config::DashboardConfig;
use moodscope::models::{MoodCategory, WeeklySeriesPoint};
use moodscope::store::{Dataset, MoodStore};
use moodscope::table::LogSort;

use common::{empty_store, raw, render_to_string, seed_app};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

// =============================================================================
// Layout at various sizes
// =============================================================================

#[test]
fn test_wide_terminal_shows_every_panel() {
    let app = seed_app();
    let screen = render_to_string(&app, 140, 45);

    assert!(screen.contains("moodscope"));
    assert!(screen.contains("▶ 1 Pie"));
    assert!(screen.contains("Mood Analytics · Pie"));
    assert!(screen.contains("Wellness"));
    assert!(screen.contains("Overall 86/100"));
    assert!(screen.contains("Mood Log · Newest · 5 entries"));
    assert!(screen.contains("Trigger"));
    assert!(screen.contains("excluded 0"));
}

#[test]
fn test_narrow_terminal_drops_optional_columns() {
    let app = seed_app();
    let screen = render_to_string(&app, 70, 30);
    assert!(screen.contains("Mood Log"));
    assert!(!screen.contains("Trigger"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let app = seed_app();
    for (w, h) in [(20, 8), (1, 1), (40, 12)] {
        let _ = render_to_string(&app, w, h);
    }
}

#[test]
fn test_overflowing_weekly_values_still_draw() {
    let week = [Weekday::Mon, Weekday::Tue, Weekday::Wed]
        .into_iter()
        .map(|day| {
            WeeklySeriesPoint::new(day)
                .with_value(MoodCategory::Happy, 1e308)
                .with_value(MoodCategory::Calm, 1e308)
                .with_value(MoodCategory::Energetic, 1e308)
        })
        .collect();
    let store = MoodStore::from_dataset(Dataset::default().with_weekly(week));
    let mut app = App::with_store(store, DashboardConfig::default());
    for view in [ChartView::Area, ChartView::Line] {
        app.select_view(view);
        let screen = render_to_string(&app, 120, 40);
        assert!(screen.contains(&format!("Mood Analytics · {}", view.display_name())));
    }
}

#[test]
fn test_empty_store_renders_placeholders() {
    let app = App::with_store(empty_store(), DashboardConfig::default());
    let screen = render_to_string(&app, 120, 40);
    assert!(screen.contains("No data for this view"));
    assert!(screen.contains("No mood entries"));
    assert!(screen.contains("Overall n/a"));
}

// =============================================================================
// Key handling
// =============================================================================

#[test]
fn test_digit_selects_view_and_panel_follows() {
    let mut app = seed_app();
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.active_view(), ChartView::Bar);
    let screen = render_to_string(&app, 140, 45);
    assert!(screen.contains("Mood Analytics · Bar"));
    assert!(screen.contains("▶ 2 Bar"));
}

#[test]
fn test_every_view_draws() {
    let mut app = seed_app();
    for view in ChartView::ALL {
        app.select_view(view);
        let screen = render_to_string(&app, 140, 45);
        assert!(
            screen.contains(&format!("Mood Analytics · {}", view.display_name())),
            "{view} title missing"
        );
    }
}

#[test]
fn test_invalid_digit_keeps_view_and_reports() {
    let mut app = seed_app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.active_view(), ChartView::Line);
    assert!(app.status.is_some());
    let screen = render_to_string(&app, 140, 45);
    assert!(screen.contains("✕"));

    // Next accepted selection clears the report
    press(&mut app, KeyCode::Right);
    assert_eq!(app.active_view(), ChartView::Radial);
    assert!(app.status.is_none());
}

#[test]
fn test_sort_and_row_navigation() {
    let mut app = seed_app();
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.sort(), LogSort::Oldest);
    assert_eq!(app.table().rows[0].id, "5");

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_row, 2);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected_row, 1);

    let screen = render_to_string(&app, 140, 45);
    assert!(screen.contains("Mood Log · Oldest"));
}

#[test]
fn test_quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = seed_app();
        press(&mut app, code);
        assert!(app.should_quit);
    }
    let mut app = seed_app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_excluded_records_counted_in_footer() {
    let store = MoodStore::from_dataset(
        Dataset::default()
            .with_observation(raw("1", "2025-09-08", "9:00 AM IST", "Happy", 5))
            .with_observation(raw("2", "2025-09-08", "9:30 AM IST", "Happy", 15)),
    );
    let app = App::with_store(store, DashboardConfig::default());
    assert_eq!(app.defect_count(), 1);
    let screen = render_to_string(&app, 140, 45);
    assert!(screen.contains("excluded 1"));
}
