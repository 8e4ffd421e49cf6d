//! Mood log table
//!
//! Orders the observation list and formats each row for display. Read-only:
//! rows are rebuilt from the observations whenever the sort changes.

mod row;
mod sort;

pub use row::{badge_token, intensity_fill, truncate_to_width, MoodLogRow};
pub use sort::LogSort;

use serde::Serialize;

use crate::models::MoodObservation;

/// Default notes column width, in terminal columns
pub const DEFAULT_NOTES_WIDTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodLogTable {
    pub sort: LogSort,
    pub rows: Vec<MoodLogRow>,
    /// Observations skipped because they failed validation
    pub skipped: usize,
}

impl MoodLogTable {
    pub fn build(observations: &[MoodObservation], sort: LogSort, notes_width: usize) -> Self {
        let mut valid: Vec<&MoodObservation> = Vec::with_capacity(observations.len());
        let mut skipped = 0;
        for obs in observations {
            match obs.validate() {
                Ok(()) => valid.push(obs),
                Err(err) => {
                    tracing::warn!(id = %obs.id, "skipping log row: {}", err);
                    skipped += 1;
                }
            }
        }

        // Stable: equal keys keep insertion order
        valid.sort_by(|a, b| sort.compare(a, b));

        Self {
            sort,
            rows: valid
                .into_iter()
                .map(|obs| MoodLogRow::from_observation(obs, notes_width))
                .collect(),
            skipped,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
