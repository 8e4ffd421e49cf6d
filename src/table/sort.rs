//! Log sort orders

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::MoodObservation;

/// How the mood log is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSort {
    /// Most recent `(date, time)` first
    #[default]
    Newest,
    /// Oldest first
    Oldest,
    /// Highest intensity first, then newest
    Intensity,
}

impl LogSort {
    pub fn display_name(&self) -> &'static str {
        match self {
            LogSort::Newest => "Newest",
            LogSort::Oldest => "Oldest",
            LogSort::Intensity => "Intensity",
        }
    }

    /// Cycle to the next sort order
    pub fn next(&self) -> Self {
        match self {
            LogSort::Newest => LogSort::Oldest,
            LogSort::Oldest => LogSort::Intensity,
            LogSort::Intensity => LogSort::Newest,
        }
    }

    /// Comparator for a stable sort; equal keys keep insertion order
    pub fn compare(&self, a: &MoodObservation, b: &MoodObservation) -> Ordering {
        match self {
            LogSort::Newest => b.timestamp_key().cmp(&a.timestamp_key()),
            LogSort::Oldest => a.timestamp_key().cmp(&b.timestamp_key()),
            LogSort::Intensity => b
                .intensity
                .cmp(&a.intensity)
                .then_with(|| b.timestamp_key().cmp(&a.timestamp_key())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_newest() {
        assert_eq!(LogSort::default().next().next().next(), LogSort::Newest);
    }
}
