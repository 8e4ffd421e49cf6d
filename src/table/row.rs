//! One formatted log row

use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::{ColorToken, MoodCategory, MoodObservation, Shift, MAX_INTENSITY};

/// Display-ready form of a [`MoodObservation`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodLogRow {
    pub id: String,
    /// e.g. `Sep 8 • 2:30 PM IST`
    pub when: String,
    pub subject: String,
    pub role: String,
    pub mood: MoodCategory,
    pub badge_token: ColorToken,
    pub intensity: u8,
    /// e.g. `8/10`
    pub intensity_label: String,
    /// `intensity * 10`, 0..=100
    pub fill_percent: u8,
    pub trigger: String,
    pub shift: Shift,
    pub shift_glyph: &'static str,
    pub shift_token: ColorToken,
    /// Notes cut to the column width
    pub notes: String,
    /// Untruncated notes, for the detail line
    pub notes_full: String,
}

impl MoodLogRow {
    pub fn from_observation(obs: &MoodObservation, notes_width: usize) -> Self {
        Self {
            id: obs.id.clone(),
            when: obs.when_label(),
            subject: obs.subject.clone(),
            role: obs.role.clone(),
            mood: obs.mood.clone(),
            badge_token: badge_token(&obs.mood),
            intensity: obs.intensity,
            intensity_label: format!("{}/{}", obs.intensity, MAX_INTENSITY),
            fill_percent: intensity_fill(obs.intensity),
            trigger: obs.trigger.clone(),
            shift: obs.shift,
            shift_glyph: obs.shift.glyph(),
            shift_token: obs.shift.color_token(),
            notes: truncate_to_width(&obs.notes, notes_width),
            notes_full: obs.notes.clone(),
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.notes != self.notes_full
    }
}

/// Badge color for a mood. Unmapped moods get the neutral token.
pub fn badge_token(mood: &MoodCategory) -> ColorToken {
    match mood {
        MoodCategory::Happy => ColorToken::Emerald,
        MoodCategory::Stressed => ColorToken::Red,
        MoodCategory::Calm => ColorToken::Blue,
        MoodCategory::Energetic => ColorToken::Orange,
        MoodCategory::Tired => ColorToken::Slate,
        MoodCategory::Other(_) => ColorToken::NEUTRAL,
    }
}

/// Intensity as a percentage of the maximum: 6 -> 60
pub fn intensity_fill(intensity: u8) -> u8 {
    intensity.min(MAX_INTENSITY) * (100 / MAX_INTENSITY)
}

/// Truncate to at most `max_width` terminal columns, adding "..." if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    format!("{}...", out.trim_end())
}
