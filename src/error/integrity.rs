//! Non-fatal data-integrity warnings.
//!
//! These are reported to the shell and logged, while rendering continues with
//! the raw values. Nothing is corrected.

use chrono::Weekday;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityWarning {
    #[error("current streak {current} exceeds longest streak {longest}")]
    StreakExceedsLongest { current: i64, longest: i64 },

    #[error("streak counter `{counter}` is negative ({value})")]
    StreakNegative { counter: &'static str, value: i64 },

    #[error("{category} share {share} is outside 0..=100")]
    ShareOutOfRange { category: String, share: f64 },

    #[error("distribution shares sum to {total}, more than {tolerance} away from 100")]
    ShareSumOutOfTolerance { total: f64, tolerance: f64 },

    #[error("metric `{label}` score {score} is outside 0..=100")]
    MetricScoreOutOfRange { label: String, score: i64 },

    #[error("weekly series has {days} distinct days, expected 7")]
    WeeklySeriesIncomplete { days: usize },

    #[error("weekly series repeats {day}; the first occurrence is used")]
    WeeklyDayDuplicated {
        #[serde(serialize_with = "serialize_weekday")]
        day: Weekday,
    },

    #[error("engagement stat `{title}` has non-positive target {target}")]
    EngagementTargetInvalid { title: String, target: f64 },

    #[error("{section} entry {index} is malformed and was dropped")]
    SummaryEntryDropped { section: &'static str, index: usize },

    #[error("{section} section is malformed and was dropped")]
    SummarySectionDropped { section: &'static str },
}

impl IntegrityWarning {
    /// Get a short code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            IntegrityWarning::StreakExceedsLongest { .. } => "INTEGRITY_STREAK",
            IntegrityWarning::StreakNegative { .. } => "INTEGRITY_STREAK_NEGATIVE",
            IntegrityWarning::ShareOutOfRange { .. } => "INTEGRITY_SHARE_RANGE",
            IntegrityWarning::ShareSumOutOfTolerance { .. } => "INTEGRITY_SHARE_SUM",
            IntegrityWarning::MetricScoreOutOfRange { .. } => "INTEGRITY_METRIC_RANGE",
            IntegrityWarning::WeeklySeriesIncomplete { .. } => "INTEGRITY_WEEK_INCOMPLETE",
            IntegrityWarning::WeeklyDayDuplicated { .. } => "INTEGRITY_WEEK_DUPLICATE",
            IntegrityWarning::EngagementTargetInvalid { .. } => "INTEGRITY_ENGAGEMENT_TARGET",
            IntegrityWarning::SummaryEntryDropped { .. } => "INTEGRITY_ENTRY_DROPPED",
            IntegrityWarning::SummarySectionDropped { .. } => "INTEGRITY_SECTION_DROPPED",
        }
    }
}

fn serialize_weekday<S>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(day)
}
