//! Mood record store
//!
//! Holds the validated observation list and the independent pre-aggregated
//! summaries for one dashboard session. The store is built once from an
//! injected [`Dataset`] and is read-only afterwards.

mod dataset;
mod raw;

pub use dataset::Dataset;
pub use raw::{RawObservation, RawRecord};

use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use crate::chart::ChartData;
use crate::error::{IntegrityWarning, MoodscopeResult, RecordError};
use crate::models::{
    EngagementStat, MoodDistributionEntry, MoodObservation, StreakCounters, WeeklySeriesPoint,
    WellnessMetric,
};

// ============================================================================
// Load Report
// ============================================================================

/// A record dropped during ingestion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcludedRecord {
    /// Position of the record in the dataset
    pub index: usize,
    /// Record id, if it had a usable one
    pub id: Option<String>,
    #[serde(serialize_with = "serialize_display")]
    pub error: RecordError,
}

/// Outcome of ingesting a dataset's observations
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub accepted: usize,
    pub excluded: Vec<ExcludedRecord>,
}

impl LoadReport {
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    pub fn is_clean(&self) -> bool {
        self.excluded.is_empty()
    }
}

fn serialize_display<S>(value: &RecordError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MoodStore {
    observations: Vec<MoodObservation>,
    distribution: Vec<MoodDistributionEntry>,
    weekly: Vec<WeeklySeriesPoint>,
    metrics: Vec<WellnessMetric>,
    streaks: StreakCounters,
    engagement: Vec<EngagementStat>,
    summary_defects: Vec<IntegrityWarning>,
    report: LoadReport,
}

impl MoodStore {
    /// Validate a dataset and build the store.
    ///
    /// Malformed observations and later duplicates of an id are excluded and
    /// listed in the [`LoadReport`]; the summaries are taken as they are,
    /// minus any entries already dropped while parsing.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let Dataset {
            observations: records,
            distribution,
            weekly,
            metrics,
            streaks,
            engagement,
            summary_defects,
        } = dataset;

        let mut observations = Vec::with_capacity(records.len());
        let mut report = LoadReport::default();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for (index, record) in records.into_iter().enumerate() {
            let (id, result) = match record {
                RawRecord::Observation(raw) => {
                    let id = raw.id.clone().filter(|id| !id.trim().is_empty());
                    (id, raw.into_observation())
                }
                RawRecord::Malformed(_) => (None, Err(RecordError::Malformed)),
            };

            let result = result.and_then(|obs| {
                if seen_ids.insert(obs.id.clone()) {
                    Ok(obs)
                } else {
                    Err(RecordError::DuplicateId { id: obs.id })
                }
            });

            match result {
                Ok(obs) => observations.push(obs),
                Err(error) => {
                    tracing::warn!(
                        index,
                        id = id.as_deref().unwrap_or("-"),
                        code = error.error_code(),
                        "excluding observation: {}",
                        error
                    );
                    report.excluded.push(ExcludedRecord { index, id, error });
                }
            }
        }

        report.accepted = observations.len();
        tracing::info!(
            accepted = report.accepted,
            excluded = report.excluded_count(),
            distribution = distribution.len(),
            weekly = weekly.len(),
            metrics = metrics.len(),
            dropped_summaries = summary_defects.len(),
            "mood store loaded"
        );

        Self {
            observations,
            distribution,
            weekly,
            metrics,
            streaks,
            engagement,
            summary_defects,
            report,
        }
    }

    /// Store built from the built-in seed dataset
    pub fn seed() -> MoodscopeResult<Self> {
        Ok(Self::from_dataset(Dataset::seed()?))
    }

    /// Store built from a dataset file
    pub fn load(path: &Path) -> MoodscopeResult<Self> {
        Ok(Self::from_dataset(Dataset::from_path(path)?))
    }

    /// Store from a file if given, the seed otherwise
    pub fn open(path: Option<&Path>) -> MoodscopeResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::seed(),
        }
    }

    /// Validated observations in dataset order
    pub fn observations(&self) -> &[MoodObservation] {
        &self.observations
    }

    pub fn distribution(&self) -> &[MoodDistributionEntry] {
        &self.distribution
    }

    pub fn weekly(&self) -> &[WeeklySeriesPoint] {
        &self.weekly
    }

    pub fn metrics(&self) -> &[WellnessMetric] {
        &self.metrics
    }

    pub fn streaks(&self) -> StreakCounters {
        self.streaks
    }

    pub fn engagement(&self) -> &[EngagementStat] {
        &self.engagement
    }

    /// Summary entries dropped while parsing the dataset
    pub fn summary_defects(&self) -> &[IntegrityWarning] {
        &self.summary_defects
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// Inputs of the chart renderers
    pub fn chart_data(&self) -> ChartData<'_> {
        ChartData::new(&self.distribution, &self.weekly)
    }
}
