//! Common test utilities for integration tests.
//!
//! Fixtures for datasets and stores, and helpers that draw the dashboard
//! into a `TestBackend` and read the buffer back as text.
//!
//! # Example
//!
//! ```ignore
//! let app = seed_app();
//! let screen = render_to_string(&app, 120, 40);
//! assert!(screen.contains("Mood Log"));
//! ```

#![allow(dead_code)]

use moodscope::app::App;
use moodscope::config::DashboardConfig;
use moodscope::models::{ColorToken, MoodCategory, MoodDistributionEntry};
use moodscope::store::{Dataset, MoodStore, RawObservation};
use moodscope::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// The seed distribution: 35/28/20/12/5
pub fn seed_distribution() -> Vec<MoodDistributionEntry> {
    vec![
        MoodDistributionEntry::new(MoodCategory::Happy, 35.0, ColorToken::Emerald),
        MoodDistributionEntry::new(MoodCategory::Calm, 28.0, ColorToken::Blue),
        MoodDistributionEntry::new(MoodCategory::Energetic, 20.0, ColorToken::Amber),
        MoodDistributionEntry::new(MoodCategory::Stressed, 12.0, ColorToken::Red),
        MoodDistributionEntry::new(MoodCategory::Tired, 5.0, ColorToken::Slate),
    ]
}

/// A valid raw observation with a placeholder subject
pub fn raw(id: &str, date: &str, time: &str, mood: &str, intensity: i64) -> RawObservation {
    RawObservation::new(id, date, time, mood, intensity).with_subject("Test Subject", "Student")
}

pub fn seed_store() -> MoodStore {
    MoodStore::seed().expect("seed store loads")
}

pub fn seed_app() -> App {
    App::with_store(seed_store(), DashboardConfig::default())
}

/// Store with no observations and no summaries
pub fn empty_store() -> MoodStore {
    MoodStore::from_dataset(Dataset::default())
}

/// Draw the dashboard and return the buffer, one line per row
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|f| ui::render(f, app)).expect("draw");
    buffer_text(terminal.backend().buffer())
}

pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
