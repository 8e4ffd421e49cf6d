//! Scorecard: the derived, display-ready form of metrics, streaks and
//! engagement stats. Recomputed from the inputs on every render.

use serde::Serialize;

use super::score::{overall_score, round_half_up, ScoreBand};
use crate::models::{
    ColorToken, EngagementStat, StreakCounters, Trend, WellnessMetric, MAX_SCORE,
};
use crate::store::MoodStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub label: String,
    pub score: i64,
    pub max_score: i64,
    pub band: ScoreBand,
    pub trend: Trend,
    pub trend_glyph: &'static str,
    pub trend_token: ColorToken,
    /// `+N%`, only for a positive delta
    pub delta_label: Option<String>,
    /// Bar fill, 0..=100
    pub fill_percent: u8,
}

impl MetricRow {
    pub fn from_metric(metric: &WellnessMetric) -> Self {
        let delta_label = (metric.trend_delta > 0).then(|| format!("+{}%", metric.trend_delta));
        Self {
            label: metric.label.clone(),
            score: metric.score,
            max_score: MAX_SCORE,
            band: ScoreBand::classify(metric.score),
            trend: metric.trend,
            trend_glyph: metric.trend.glyph(),
            trend_token: metric.trend.trend_color_token(),
            delta_label,
            fill_percent: metric.score.clamp(0, MAX_SCORE) as u8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementRow {
    pub title: String,
    /// e.g. `12/14`
    pub value_label: String,
    /// 0..=100
    pub progress: u8,
}

impl EngagementRow {
    pub fn from_stat(stat: &EngagementStat) -> Self {
        Self {
            title: stat.title.clone(),
            value_label: format!("{}/{}", stat.value, stat.target),
            progress: engagement_progress(stat),
        }
    }
}

/// `value / target` as a whole percentage, clamped to 0..=100.
/// A non-positive target gives 0.
pub fn engagement_progress(stat: &EngagementStat) -> u8 {
    if !(stat.target > 0.0) || !stat.value.is_finite() {
        return 0;
    }
    let percent = round_half_up(stat.value / stat.target * 100.0);
    percent.clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub overall: Option<i64>,
    pub overall_band: Option<ScoreBand>,
    pub metrics: Vec<MetricRow>,
    /// Passed through unmodified
    pub streaks: StreakCounters,
    pub engagement: Vec<EngagementRow>,
}

impl Scorecard {
    pub fn compute(
        metrics: &[WellnessMetric],
        streaks: StreakCounters,
        engagement: &[EngagementStat],
    ) -> Self {
        let overall = overall_score(metrics);
        Self {
            overall,
            overall_band: overall.map(ScoreBand::classify),
            metrics: metrics.iter().map(MetricRow::from_metric).collect(),
            streaks,
            engagement: engagement.iter().map(EngagementRow::from_stat).collect(),
        }
    }

    pub fn from_store(store: &MoodStore) -> Self {
        Self::compute(store.metrics(), store.streaks(), store.engagement())
    }
}
