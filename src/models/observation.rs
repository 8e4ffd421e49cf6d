//! Mood observation record

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::mood::{MoodCategory, Shift};
use crate::error::RecordError;

/// Highest intensity an observation may carry
pub const MAX_INTENSITY: u8 = 10;

// ============================================================================
// Local Time
// ============================================================================

/// Wall-clock time of an observation plus the zone label it was logged in
/// (e.g. "IST"). The label is display-only; ordering uses the time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalTime {
    pub time: NaiveTime,
    #[serde(default)]
    pub zone: String,
}

impl LocalTime {
    pub fn new(time: NaiveTime, zone: impl Into<String>) -> Self {
        Self {
            time,
            zone: zone.into(),
        }
    }

    /// Parse `14:30`, `14:30 IST`, `2:30 PM` or `2:30 PM IST`.
    pub fn parse(input: &str) -> Option<Self> {
        let mut tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.is_empty() {
            return None;
        }

        // A trailing alphabetic token that is not AM/PM is the zone label
        let zone = match tokens.last() {
            Some(last)
                if tokens.len() > 1
                    && last.chars().all(|c| c.is_ascii_alphabetic())
                    && !last.eq_ignore_ascii_case("am")
                    && !last.eq_ignore_ascii_case("pm") =>
            {
                let zone = last.to_string();
                tokens.pop();
                zone
            }
            _ => String::new(),
        };

        let clock = tokens.join(" ");
        let time = NaiveTime::parse_from_str(&clock, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&clock, "%I:%M %p"))
            .ok()?;

        Some(Self { time, zone })
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.time.format("%-I:%M %p");
        if self.zone.is_empty() {
            write!(f, "{}", clock)
        } else {
            write!(f, "{} {}", clock, self.zone)
        }
    }
}

// ============================================================================
// Mood Observation
// ============================================================================

/// One logged emotional data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodObservation {
    pub id: String,
    pub date: NaiveDate,
    pub time: LocalTime,
    pub mood: MoodCategory,
    /// 0..=10
    pub intensity: u8,
    pub trigger: String,
    pub shift: Shift,
    pub notes: String,
    /// Display name of the person the observation belongs to
    pub subject: String,
    pub role: String,
}

impl MoodObservation {
    /// Create an observation with empty context fields
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        time: LocalTime,
        mood: MoodCategory,
        intensity: u8,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            time,
            mood,
            intensity,
            trigger: String::new(),
            shift: Shift::Stable,
            notes: String::new(),
            subject: String::new(),
            role: String::new(),
        }
    }

    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    pub fn with_shift(mut self, shift: Shift) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>, role: impl Into<String>) -> Self {
        self.subject = subject.into();
        self.role = role.into();
        self
    }

    /// Check the record-level invariants.
    ///
    /// Uniqueness of `id` is a collection invariant and is checked by the store.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id.trim().is_empty() {
            return Err(RecordError::MissingField { field: "id" });
        }
        if self.subject.trim().is_empty() {
            return Err(RecordError::MissingField { field: "subject" });
        }
        if self.intensity > MAX_INTENSITY {
            return Err(RecordError::IntensityOutOfRange {
                value: self.intensity as i64,
            });
        }
        Ok(())
    }

    /// `(date, time)` key used for chronological ordering
    pub fn timestamp_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time.time)
    }

    /// "Sep 8 • 2:30 PM IST"
    pub fn when_label(&self) -> String {
        format!("{} • {}", self.date.format("%b %-d"), self.time)
    }
}
