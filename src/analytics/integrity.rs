//! Data-integrity checks over a loaded store.
//!
//! Checks only report. Rendering always uses the raw values.

use chrono::Weekday;
use std::collections::HashSet;

use crate::error::IntegrityWarning;
use crate::models::MAX_SCORE;
use crate::store::MoodStore;

/// Default allowed distance of the share total from 100
pub const DEFAULT_SHARE_TOLERANCE: f64 = 5.0;

/// Run every integrity check and log each warning.
///
/// Summary entries dropped while parsing the dataset come first.
pub fn check_integrity(store: &MoodStore, share_tolerance: f64) -> Vec<IntegrityWarning> {
    let mut warnings = store.summary_defects().to_vec();

    let streaks = store.streaks();
    if !streaks.is_consistent() {
        warnings.push(IntegrityWarning::StreakExceedsLongest {
            current: streaks.current,
            longest: streaks.longest,
        });
    }
    for (counter, value) in streaks.negative_counters() {
        warnings.push(IntegrityWarning::StreakNegative { counter, value });
    }

    let distribution = store.distribution();
    for entry in distribution.iter().filter(|e| !e.share_in_range()) {
        warnings.push(IntegrityWarning::ShareOutOfRange {
            category: entry.category.label().to_string(),
            share: entry.share,
        });
    }
    if !distribution.is_empty() {
        let total: f64 = distribution.iter().map(|e| e.share).sum();
        if !total.is_finite() || (total - 100.0).abs() > share_tolerance {
            warnings.push(IntegrityWarning::ShareSumOutOfTolerance {
                total,
                tolerance: share_tolerance,
            });
        }
    }

    let score_range = 0..=MAX_SCORE;
    for metric in store
        .metrics()
        .iter()
        .filter(|m| !score_range.contains(&m.score))
    {
        warnings.push(IntegrityWarning::MetricScoreOutOfRange {
            label: metric.label.clone(),
            score: metric.score,
        });
    }

    let weekly = store.weekly();
    if !weekly.is_empty() {
        let mut seen: HashSet<Weekday> = HashSet::new();
        let mut reported: HashSet<Weekday> = HashSet::new();
        for point in weekly {
            if !seen.insert(point.day) && reported.insert(point.day) {
                warnings.push(IntegrityWarning::WeeklyDayDuplicated { day: point.day });
            }
        }
        if seen.len() != 7 {
            warnings.push(IntegrityWarning::WeeklySeriesIncomplete { days: seen.len() });
        }
    }

    for stat in store.engagement().iter().filter(|s| !(s.target > 0.0)) {
        warnings.push(IntegrityWarning::EngagementTargetInvalid {
            title: stat.title.clone(),
            target: stat.target,
        });
    }

    for warning in &warnings {
        tracing::warn!(code = warning.error_code(), "data integrity: {}", warning);
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EngagementStat, MoodCategory, MoodDistributionEntry, StreakCounters, WeeklySeriesPoint,
        WellnessMetric,
    };
    use crate::store::Dataset;

    fn store(dataset: Dataset) -> MoodStore {
        MoodStore::from_dataset(dataset)
    }

    #[test]
    fn test_seed_is_clean() {
        let store = MoodStore::seed().unwrap();
        assert!(check_integrity(&store, DEFAULT_SHARE_TOLERANCE).is_empty());
    }

    #[test]
    fn test_streak_violation_flagged_not_corrected() {
        let store = store(Dataset::default().with_streaks(StreakCounters::new(50, 20, 3, 10)));
        let warnings = check_integrity(&store, DEFAULT_SHARE_TOLERANCE);
        assert_eq!(
            warnings,
            vec![IntegrityWarning::StreakExceedsLongest {
                current: 50,
                longest: 20
            }]
        );
        assert_eq!(store.streaks().current, 50);
    }

    #[test]
    fn test_negative_streak_counters_flagged() {
        let store = store(Dataset::default().with_streaks(StreakCounters::new(-2, 5, 0, 0)));
        assert_eq!(
            check_integrity(&store, DEFAULT_SHARE_TOLERANCE),
            vec![IntegrityWarning::StreakNegative {
                counter: "current",
                value: -2
            }]
        );
    }

    #[test]
    fn test_share_checks() {
        let store = store(Dataset::default().with_distribution(vec![
            MoodDistributionEntry::with_default_color(MoodCategory::Happy, 120.0),
            MoodDistributionEntry::with_default_color(MoodCategory::Calm, 10.0),
        ]));
        let warnings = check_integrity(&store, DEFAULT_SHARE_TOLERANCE);
        assert!(warnings
            .iter()
            .any(|w| matches!(w, IntegrityWarning::ShareOutOfRange { share, .. } if *share == 120.0)));
        assert!(warnings
            .iter()
            .any(|w| matches!(w, IntegrityWarning::ShareSumOutOfTolerance { total, .. } if *total == 130.0)));
    }

    #[test]
    fn test_rounding_within_tolerance_is_fine() {
        let store = store(Dataset::default().with_distribution(vec![
            MoodDistributionEntry::with_default_color(MoodCategory::Happy, 33.0),
            MoodDistributionEntry::with_default_color(MoodCategory::Calm, 33.0),
            MoodDistributionEntry::with_default_color(MoodCategory::Tired, 33.0),
        ]));
        assert!(check_integrity(&store, DEFAULT_SHARE_TOLERANCE).is_empty());
    }

    #[test]
    fn test_weekly_and_metric_and_engagement_checks() {
        let store = store(
            Dataset::default()
                .with_weekly(vec![
                    WeeklySeriesPoint::new(Weekday::Mon),
                    WeeklySeriesPoint::new(Weekday::Mon),
                    WeeklySeriesPoint::new(Weekday::Tue),
                ])
                .with_metrics(vec![
                    WellnessMetric::new("Focus", 140),
                    WellnessMetric::new("Calm", -1),
                ])
                .with_engagement(vec![EngagementStat::new("Goals", 3.0, 0.0)]),
        );
        let warnings = check_integrity(&store, DEFAULT_SHARE_TOLERANCE);
        let codes: Vec<&str> = warnings.iter().map(|w| w.error_code()).collect();
        assert_eq!(
            codes,
            vec![
                "INTEGRITY_METRIC_RANGE",
                "INTEGRITY_METRIC_RANGE",
                "INTEGRITY_WEEK_DUPLICATE",
                "INTEGRITY_WEEK_INCOMPLETE",
                "INTEGRITY_ENGAGEMENT_TARGET",
            ]
        );
    }
}
