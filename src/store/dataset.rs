//! Dataset documents: the injected input of a dashboard session.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::raw::{RawObservation, RawRecord};
use crate::error::{IntegrityWarning, MoodscopeError, MoodscopeResult};
use crate::models::{
    EngagementStat, MoodDistributionEntry, StreakCounters, WeeklySeriesPoint, WellnessMetric,
};

/// Curated values the dashboard ships with
const SEED_DATASET: &str = include_str!("../../data/seed.json");

/// Everything a dashboard session renders, before validation.
///
/// The distribution and the weekly series are independent pre-aggregated
/// summaries; they are not derived from `observations`. A summary entry (or
/// a whole section) of the wrong shape is dropped while parsing and listed in
/// `summary_defects`, so one bad value never rejects the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DatasetDocument")]
pub struct Dataset {
    pub observations: Vec<RawRecord>,
    pub distribution: Vec<MoodDistributionEntry>,
    pub weekly: Vec<WeeklySeriesPoint>,
    pub metrics: Vec<WellnessMetric>,
    pub streaks: StreakCounters,
    pub engagement: Vec<EngagementStat>,
    #[serde(skip)]
    pub summary_defects: Vec<IntegrityWarning>,
}

// ============================================================================
// Wire form
// ============================================================================

/// One summary entry: the expected shape, or anything else
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry<T> {
    Valid(T),
    Malformed(serde_json::Value),
}

/// A summary section: a list of entries, or anything else
#[derive(Deserialize)]
#[serde(untagged)]
enum Section<T> {
    Entries(Vec<Entry<T>>),
    Malformed(serde_json::Value),
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section::Entries(Vec::new())
    }
}

impl<T> Section<T> {
    /// Keep the well-formed entries, reporting the rest
    fn accept(self, section: &'static str, defects: &mut Vec<IntegrityWarning>) -> Vec<T> {
        match self {
            Section::Entries(entries) => entries
                .into_iter()
                .enumerate()
                .filter_map(|(index, entry)| match entry {
                    Entry::Valid(value) => Some(value),
                    Entry::Malformed(_) => {
                        defects.push(IntegrityWarning::SummaryEntryDropped { section, index });
                        None
                    }
                })
                .collect(),
            Section::Malformed(_) => {
                defects.push(IntegrityWarning::SummarySectionDropped { section });
                Vec::new()
            }
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct DatasetDocument {
    observations: Vec<RawRecord>,
    distribution: Section<MoodDistributionEntry>,
    weekly: Section<WeeklySeriesPoint>,
    metrics: Section<WellnessMetric>,
    streaks: Option<Entry<StreakCounters>>,
    engagement: Section<EngagementStat>,
}

impl From<DatasetDocument> for Dataset {
    fn from(document: DatasetDocument) -> Self {
        let mut defects = Vec::new();
        let distribution = document.distribution.accept("distribution", &mut defects);
        let weekly = document.weekly.accept("weekly", &mut defects);
        let metrics = document.metrics.accept("metrics", &mut defects);
        let streaks = match document.streaks {
            Some(Entry::Valid(streaks)) => streaks,
            Some(Entry::Malformed(_)) => {
                defects.push(IntegrityWarning::SummarySectionDropped { section: "streaks" });
                StreakCounters::default()
            }
            None => StreakCounters::default(),
        };
        let engagement = document.engagement.accept("engagement", &mut defects);

        Self {
            observations: document.observations,
            distribution,
            weekly,
            metrics,
            streaks,
            engagement,
            summary_defects: defects,
        }
    }
}

impl Dataset {
    /// Parse a dataset document. `origin` names the source in errors.
    pub fn from_json(origin: &str, text: &str) -> MoodscopeResult<Self> {
        serde_json::from_str(text).map_err(|source| MoodscopeError::Dataset {
            origin: origin.to_string(),
            source,
        })
    }

    /// Read and parse a dataset file
    pub fn from_path(path: &Path) -> MoodscopeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| MoodscopeError::io(path, e))?;
        Self::from_json(&path.display().to_string(), &text)
    }

    /// The built-in dataset
    pub fn seed() -> MoodscopeResult<Self> {
        Self::from_json("built-in seed", SEED_DATASET)
    }

    // Builder-style setters, mostly for tests and embedding

    pub fn with_observation(mut self, observation: RawObservation) -> Self {
        self.observations.push(observation.into());
        self
    }

    pub fn with_distribution(mut self, distribution: Vec<MoodDistributionEntry>) -> Self {
        self.distribution = distribution;
        self
    }

    pub fn with_weekly(mut self, weekly: Vec<WeeklySeriesPoint>) -> Self {
        self.weekly = weekly;
        self
    }

    pub fn with_metrics(mut self, metrics: Vec<WellnessMetric>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_streaks(mut self, streaks: StreakCounters) -> Self {
        self.streaks = streaks;
        self
    }

    pub fn with_engagement(mut self, engagement: Vec<EngagementStat>) -> Self {
        self.engagement = engagement;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses() {
        let seed = Dataset::seed().unwrap();
        assert_eq!(seed.observations.len(), 5);
        assert_eq!(seed.distribution.len(), 5);
        assert_eq!(seed.weekly.len(), 7);
        assert_eq!(seed.metrics.len(), 4);
        assert_eq!(seed.streaks, StreakCounters::new(23, 45, 7, 23));
        assert_eq!(seed.engagement.len(), 4);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dataset = Dataset::from_json("inline", "{}").unwrap();
        assert!(dataset.observations.is_empty());
        assert!(dataset.distribution.is_empty());
        assert_eq!(dataset.streaks, StreakCounters::default());
    }

    #[test]
    fn test_malformed_summary_entries_are_dropped() {
        let json = r#"{
            "metrics": [
                {"label": "Focus", "score": 80},
                {"label": "Sleep", "score": "high"},
                {"label": "Calm", "score": 300}
            ],
            "weekly": [{"day": "Funday"}, {"day": "Mon", "values": {"Happy": 40}}],
            "engagement": 7
        }"#;
        let dataset = Dataset::from_json("inline", json).unwrap();
        assert_eq!(dataset.metrics.len(), 2);
        assert_eq!(dataset.metrics[1].score, 300);
        assert_eq!(dataset.weekly.len(), 1);
        assert!(dataset.engagement.is_empty());
        assert_eq!(
            dataset.summary_defects,
            vec![
                IntegrityWarning::SummaryEntryDropped {
                    section: "weekly",
                    index: 0
                },
                IntegrityWarning::SummaryEntryDropped {
                    section: "metrics",
                    index: 1
                },
                IntegrityWarning::SummarySectionDropped {
                    section: "engagement"
                },
            ]
        );
    }

    #[test]
    fn test_malformed_streaks_fall_back_to_zero() {
        let dataset = Dataset::from_json("inline", r#"{"streaks": [1, 2]}"#).unwrap();
        assert_eq!(dataset.streaks, StreakCounters::default());
        assert_eq!(
            dataset.summary_defects,
            vec![IntegrityWarning::SummarySectionDropped { section: "streaks" }]
        );
    }

    #[test]
    fn test_invalid_document_names_origin() {
        let err = Dataset::from_json("broken.json", "{not json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
