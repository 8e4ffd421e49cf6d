//! Overall wellness score and score banding

use serde::Serialize;

use crate::models::{ColorToken, WellnessMetric};

/// Quality tier of a 0..=100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Fair,
    Good,
    Excellent,
}

impl ScoreBand {
    /// `>= 90` Excellent, `>= 75` Good, `>= 60` Fair, otherwise Low
    pub fn classify(score: i64) -> Self {
        match score {
            90.. => ScoreBand::Excellent,
            75..=89 => ScoreBand::Good,
            60..=74 => ScoreBand::Fair,
            _ => ScoreBand::Low,
        }
    }

    pub fn color_token(&self) -> ColorToken {
        match self {
            ScoreBand::Excellent => ColorToken::Emerald,
            ScoreBand::Good => ColorToken::Blue,
            ScoreBand::Fair => ColorToken::Amber,
            ScoreBand::Low => ColorToken::Rose,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Low => "Needs attention",
        }
    }
}

/// Mean of the metric scores, rounded half up. `None` for no metrics.
pub fn overall_score(metrics: &[WellnessMetric]) -> Option<i64> {
    if metrics.is_empty() {
        return None;
    }
    let n = metrics.len() as i128;
    let sum: i128 = metrics.iter().map(|m| i128::from(m.score)).sum();
    // floor((sum / n) + 1/2), in integers
    let mean = (2 * sum + n).div_euclid(2 * n);
    Some(mean.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
}

/// Round half up for non-negative ratios
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scores: &[i64]) -> Vec<WellnessMetric> {
        scores
            .iter()
            .map(|s| WellnessMetric::new(format!("m{s}"), *s))
            .collect()
    }

    #[test]
    fn test_overall_rounds_half_up() {
        assert_eq!(overall_score(&metrics(&[87, 92, 78, 85])), Some(86));
        assert_eq!(overall_score(&metrics(&[1, 2])), Some(2));
        assert_eq!(overall_score(&metrics(&[1, 1, 2])), Some(1));
        assert_eq!(overall_score(&metrics(&[100])), Some(100));
    }

    #[test]
    fn test_overall_uses_raw_scores() {
        assert_eq!(overall_score(&metrics(&[300, 100])), Some(200));
        assert_eq!(overall_score(&metrics(&[-3, 0])), Some(-1));
        assert_eq!(overall_score(&metrics(&[i64::MAX, i64::MAX])), Some(i64::MAX));
    }

    #[test]
    fn test_overall_empty_is_none() {
        assert_eq!(overall_score(&[]), None);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(ScoreBand::classify(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::classify(89), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(75), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(74), ScoreBand::Fair);
        assert_eq!(ScoreBand::classify(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::classify(59), ScoreBand::Low);
        assert_eq!(ScoreBand::classify(0), ScoreBand::Low);
        assert_eq!(ScoreBand::classify(-5), ScoreBand::Low);
        assert_eq!(ScoreBand::classify(300), ScoreBand::Excellent);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(85.5), 86.0);
        assert_eq!(round_half_up(85.49), 85.0);
    }
}
