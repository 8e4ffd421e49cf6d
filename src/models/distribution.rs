//! Pre-aggregated mood summaries: the category distribution and the weekly series

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::color::ColorToken;
use super::mood::MoodCategory;

// ============================================================================
// Distribution
// ============================================================================

/// One slice of the mood distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DistributionRecord")]
pub struct MoodDistributionEntry {
    pub category: MoodCategory,
    /// Percentage, 0..=100. Shares need not sum to exactly 100.
    pub share: f64,
    pub color_token: ColorToken,
}

/// Wire form; a missing color token means the category default
#[derive(Deserialize)]
struct DistributionRecord {
    category: MoodCategory,
    share: f64,
    #[serde(default)]
    color_token: Option<ColorToken>,
}

impl From<DistributionRecord> for MoodDistributionEntry {
    fn from(record: DistributionRecord) -> Self {
        match record.color_token {
            Some(token) => Self::new(record.category, record.share, token),
            None => Self::with_default_color(record.category, record.share),
        }
    }
}

impl MoodDistributionEntry {
    pub fn new(category: MoodCategory, share: f64, color_token: ColorToken) -> Self {
        Self {
            category,
            share,
            color_token,
        }
    }

    /// Entry colored with the category's default token
    pub fn with_default_color(category: MoodCategory, share: f64) -> Self {
        let color_token = category.default_color_token();
        Self::new(category, share, color_token)
    }

    /// Check `0 <= share <= 100`
    pub fn share_in_range(&self) -> bool {
        self.share.is_finite() && (0.0..=100.0).contains(&self.share)
    }
}

/// Category -> color lookup built from a distribution.
///
/// The distribution is the single source of chart colors, so every renderer
/// (including the weekly ones, whose points carry no colors) resolves a
/// category through this table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    tokens: BTreeMap<MoodCategory, ColorToken>,
}

impl ColorTable {
    pub fn from_distribution(entries: &[MoodDistributionEntry]) -> Self {
        let mut tokens = BTreeMap::new();
        for entry in entries {
            // First entry wins for duplicated categories
            tokens
                .entry(entry.category.clone())
                .or_insert(entry.color_token);
        }
        Self { tokens }
    }

    /// Token for a category, falling back to the category default
    pub fn token_for(&self, category: &MoodCategory) -> ColorToken {
        self.tokens
            .get(category)
            .copied()
            .unwrap_or_else(|| category.default_color_token())
    }
}

// ============================================================================
// Weekly Series
// ============================================================================

/// Per-day percentages for the tracked categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySeriesPoint {
    pub day: Weekday,
    #[serde(default)]
    pub values: BTreeMap<MoodCategory, f64>,
}

impl WeeklySeriesPoint {
    pub fn new(day: Weekday) -> Self {
        Self {
            day,
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, category: MoodCategory, value: f64) -> Self {
        self.values.insert(category, value);
        self
    }

    /// Value for a category; a category missing from the point reads as 0
    pub fn value(&self, category: &MoodCategory) -> f64 {
        self.values.get(category).copied().unwrap_or(0.0)
    }
}

/// Monday-first position of a weekday (Mon = 0, Sun = 6)
pub fn day_index(day: Weekday) -> u32 {
    day.num_days_from_monday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_range() {
        let ok = MoodDistributionEntry::with_default_color(MoodCategory::Happy, 100.0);
        assert!(ok.share_in_range());
        let negative = MoodDistributionEntry::with_default_color(MoodCategory::Happy, -1.0);
        assert!(!negative.share_in_range());
        let nan = MoodDistributionEntry::with_default_color(MoodCategory::Happy, f64::NAN);
        assert!(!nan.share_in_range());
    }

    #[test]
    fn test_color_table_prefers_distribution_tokens() {
        let entries = vec![MoodDistributionEntry::new(
            MoodCategory::Happy,
            40.0,
            ColorToken::Purple,
        )];
        let table = ColorTable::from_distribution(&entries);
        assert_eq!(table.token_for(&MoodCategory::Happy), ColorToken::Purple);
        assert_eq!(table.token_for(&MoodCategory::Calm), ColorToken::Blue);
    }

    #[test]
    fn test_missing_color_token_uses_default() {
        let entry: MoodDistributionEntry =
            serde_json::from_str(r#"{"category":"Stressed","share":12}"#).unwrap();
        assert_eq!(entry.color_token, MoodCategory::Stressed.default_color_token());
    }

    #[test]
    fn test_weekly_point_deserializes_day_names() {
        let json = r#"{"day":"Wed","values":{"Happy":35,"Calm":30}}"#;
        let point: WeeklySeriesPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.day, Weekday::Wed);
        assert_eq!(point.value(&MoodCategory::Happy), 35.0);
        assert_eq!(point.value(&MoodCategory::Energetic), 0.0);
    }

    #[test]
    fn test_day_index_is_monday_first() {
        assert_eq!(day_index(Weekday::Mon), 0);
        assert_eq!(day_index(Weekday::Sun), 6);
    }
}
