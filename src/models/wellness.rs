//! Wellness metrics, streak counters and engagement stats

use serde::{Deserialize, Serialize};

use super::mood::Trend;

/// Upper bound of every wellness metric score
pub const MAX_SCORE: i64 = 100;

/// A scored wellness dimension with its trend already attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessMetric {
    pub label: String,
    /// Expected in 0..=100; kept as given so out-of-range values can be reported
    pub score: i64,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub trend_delta: i64,
}

impl WellnessMetric {
    pub fn new(label: impl Into<String>, score: i64) -> Self {
        Self {
            label: label.into(),
            score,
            trend: Trend::Stable,
            trend_delta: 0,
        }
    }

    pub fn with_trend(mut self, trend: Trend, delta: i64) -> Self {
        self.trend = trend;
        self.trend_delta = delta;
        self
    }

    pub fn max_score(&self) -> i64 {
        MAX_SCORE
    }
}

/// Engagement streaks, in days. Missing counters read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakCounters {
    pub current: i64,
    pub longest: i64,
    pub this_week: i64,
    pub this_month: i64,
}

impl StreakCounters {
    pub fn new(current: i64, longest: i64, this_week: i64, this_month: i64) -> Self {
        Self {
            current,
            longest,
            this_week,
            this_month,
        }
    }

    /// `current <= longest`
    pub fn is_consistent(&self) -> bool {
        self.current <= self.longest
    }

    /// Counters below zero, by name
    pub fn negative_counters(&self) -> Vec<(&'static str, i64)> {
        [
            ("current", self.current),
            ("longest", self.longest),
            ("this_week", self.this_week),
            ("this_month", self.this_month),
        ]
        .into_iter()
        .filter(|(_, value)| *value < 0)
        .collect()
    }
}

/// Progress toward an engagement goal (e.g. "12 / 14 weekly check-ins")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementStat {
    pub title: String,
    pub value: f64,
    pub target: f64,
}

impl EngagementStat {
    pub fn new(title: impl Into<String>, value: f64, target: f64) -> Self {
        Self {
            title: title.into(),
            value,
            target,
        }
    }
}
