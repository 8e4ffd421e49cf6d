//! Mood categories and directional indicators

use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::ColorToken;

// ============================================================================
// Mood Category
// ============================================================================

/// Emotional category of an observation or distribution slice.
///
/// The five well-known categories get their own variants; anything else a
/// dataset names is kept verbatim as [`MoodCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MoodCategory {
    Happy,
    Calm,
    Energetic,
    Stressed,
    Tired,
    Other(String),
}

impl MoodCategory {
    /// Well-known categories in display order
    pub const KNOWN: [MoodCategory; 5] = [
        MoodCategory::Happy,
        MoodCategory::Calm,
        MoodCategory::Energetic,
        MoodCategory::Stressed,
        MoodCategory::Tired,
    ];

    /// Categories drawn by the weekly area and line charts
    pub const TRACKED: [MoodCategory; 3] =
        [MoodCategory::Happy, MoodCategory::Calm, MoodCategory::Energetic];

    /// Display label
    pub fn label(&self) -> &str {
        match self {
            MoodCategory::Happy => "Happy",
            MoodCategory::Calm => "Calm",
            MoodCategory::Energetic => "Energetic",
            MoodCategory::Stressed => "Stressed",
            MoodCategory::Tired => "Tired",
            MoodCategory::Other(name) => name,
        }
    }

    /// Check if this is one of the well-known categories
    pub fn is_known(&self) -> bool {
        !matches!(self, MoodCategory::Other(_))
    }

    /// Chart color used when a dataset does not carry a token for the category
    pub fn default_color_token(&self) -> ColorToken {
        match self {
            MoodCategory::Happy => ColorToken::Emerald,
            MoodCategory::Calm => ColorToken::Blue,
            MoodCategory::Energetic => ColorToken::Amber,
            MoodCategory::Stressed => ColorToken::Red,
            MoodCategory::Tired => ColorToken::Slate,
            MoodCategory::Other(_) => ColorToken::NEUTRAL,
        }
    }
}

impl From<String> for MoodCategory {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "happy" => MoodCategory::Happy,
            "calm" => MoodCategory::Calm,
            "energetic" => MoodCategory::Energetic,
            "stressed" => MoodCategory::Stressed,
            "tired" => MoodCategory::Tired,
            _ => MoodCategory::Other(trimmed.to_string()),
        }
    }
}

impl From<&str> for MoodCategory {
    fn from(value: &str) -> Self {
        MoodCategory::from(value.to_string())
    }
}

impl From<MoodCategory> for String {
    fn from(value: MoodCategory) -> Self {
        match value {
            MoodCategory::Other(name) => name,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Shift / Trend
// ============================================================================

/// Direction of change, used both for an observation's mood shift and for a
/// metric's trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Up,
    Down,
    #[default]
    Stable,
}

/// Trend of a wellness metric. Same three directions as [`Shift`].
pub type Trend = Shift;

impl Shift {
    /// Directional glyph
    pub fn glyph(&self) -> &'static str {
        match self {
            Shift::Up => "▲",
            Shift::Down => "▼",
            Shift::Stable => "─",
        }
    }

    /// Color of the glyph in the mood log
    pub fn color_token(&self) -> ColorToken {
        match self {
            Shift::Up => ColorToken::Emerald,
            Shift::Down => ColorToken::Red,
            Shift::Stable => ColorToken::Slate,
        }
    }

    /// Color of the glyph on a wellness metric; a falling trend is rose
    pub fn trend_color_token(&self) -> ColorToken {
        match self {
            Shift::Down => ColorToken::Rose,
            other => other.color_token(),
        }
    }

    /// Short name
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Up => "up",
            Shift::Down => "down",
            Shift::Stable => "stable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories_case_insensitive() {
        assert_eq!(MoodCategory::from("happy"), MoodCategory::Happy);
        assert_eq!(MoodCategory::from(" CALM "), MoodCategory::Calm);
        assert_eq!(MoodCategory::from("Energetic"), MoodCategory::Energetic);
    }

    #[test]
    fn test_unknown_category_kept_verbatim() {
        let mood = MoodCategory::from("Anxious");
        assert_eq!(mood, MoodCategory::Other("Anxious".to_string()));
        assert_eq!(mood.label(), "Anxious");
        assert!(!mood.is_known());
        assert_eq!(mood.default_color_token(), ColorToken::NEUTRAL);
    }

    #[test]
    fn test_category_serde_uses_label() {
        let json = serde_json::to_string(&MoodCategory::Stressed).unwrap();
        assert_eq!(json, "\"Stressed\"");
        let parsed: MoodCategory = serde_json::from_str("\"Grateful\"").unwrap();
        assert_eq!(parsed, MoodCategory::Other("Grateful".to_string()));
    }

    #[test]
    fn test_shift_glyphs_are_distinct() {
        assert_ne!(Shift::Up.glyph(), Shift::Down.glyph());
        assert_ne!(Shift::Up.glyph(), Shift::Stable.glyph());
        assert_ne!(Shift::Down.glyph(), Shift::Stable.glyph());
    }

    #[test]
    fn test_falling_trend_is_rose_but_falling_shift_is_red() {
        assert_eq!(Shift::Down.color_token(), ColorToken::Red);
        assert_eq!(Shift::Down.trend_color_token(), ColorToken::Rose);
        assert_eq!(Shift::Up.trend_color_token(), ColorToken::Emerald);
        assert_eq!(Shift::Stable.trend_color_token(), ColorToken::Slate);
    }

    #[test]
    fn test_shift_serde_lowercase() {
        let shift: Shift = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(shift, Shift::Down);
        assert_eq!(Shift::default(), Shift::Stable);
    }
}
