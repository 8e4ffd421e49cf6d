//! Loosely-typed observation records as they appear in a dataset document.
//!
//! Every field is optional so that one bad record can be reported and dropped
//! instead of failing the whole document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::models::{deserialize_optional_id, LocalTime, MoodCategory, MoodObservation, Shift};

/// Observation fields before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawObservation {
    #[serde(deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `14:30 IST` or `2:30 PM IST`
    pub time: Option<String>,
    pub mood: Option<String>,
    pub intensity: Option<i64>,
    pub trigger: Option<String>,
    pub shift: Option<String>,
    pub notes: Option<String>,
    #[serde(alias = "user")]
    pub subject: Option<String>,
    pub role: Option<String>,
}

/// A record slot in the dataset: either something with the observation shape,
/// or anything else (kept so it can be counted as excluded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRecord {
    Observation(RawObservation),
    Malformed(serde_json::Value),
}

impl From<RawObservation> for RawRecord {
    fn from(value: RawObservation) -> Self {
        RawRecord::Observation(value)
    }
}

impl RawObservation {
    /// Raw record with the required fields filled in
    pub fn new(id: &str, date: &str, time: &str, mood: &str, intensity: i64) -> Self {
        Self {
            id: Some(id.to_string()),
            date: Some(date.to_string()),
            time: Some(time.to_string()),
            mood: Some(mood.to_string()),
            intensity: Some(intensity),
            subject: Some("Anonymous".to_string()),
            ..Self::default()
        }
    }

    pub fn with_subject(mut self, subject: &str, role: &str) -> Self {
        self.subject = Some(subject.to_string());
        self.role = Some(role.to_string());
        self
    }

    pub fn with_shift(mut self, shift: &str) -> Self {
        self.shift = Some(shift.to_string());
        self
    }

    pub fn with_trigger(mut self, trigger: &str) -> Self {
        self.trigger = Some(trigger.to_string());
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// Validate and convert into a [`MoodObservation`].
    pub fn into_observation(self) -> Result<MoodObservation, RecordError> {
        let id = required(self.id, "id")?;

        let date_text = required(self.date, "date")?;
        let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d")
            .map_err(|_| RecordError::InvalidDate { value: date_text })?;

        let time_text = required(self.time, "time")?;
        let time = LocalTime::parse(&time_text)
            .ok_or(RecordError::InvalidTime { value: time_text })?;

        let mood = MoodCategory::from(required(self.mood, "mood")?);

        let intensity = self
            .intensity
            .ok_or(RecordError::MissingField { field: "intensity" })?;
        let intensity = u8::try_from(intensity)
            .ok()
            .filter(|value| *value <= crate::models::MAX_INTENSITY)
            .ok_or(RecordError::IntensityOutOfRange { value: intensity })?;

        let shift = match self.shift.as_deref().map(str::trim) {
            None | Some("") => Shift::Stable,
            Some(text) => parse_shift(text)?,
        };

        let subject = required(self.subject, "subject")?;

        let observation = MoodObservation::new(id, date, time, mood, intensity)
            .with_trigger(self.trigger.unwrap_or_default())
            .with_shift(shift)
            .with_notes(self.notes.unwrap_or_default())
            .with_subject(subject, self.role.unwrap_or_default());

        observation.validate()?;
        Ok(observation)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RecordError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(RecordError::MissingField { field }),
    }
}

fn parse_shift(text: &str) -> Result<Shift, RecordError> {
    match text.to_lowercase().as_str() {
        "up" => Ok(Shift::Up),
        "down" => Ok(Shift::Down),
        "stable" | "none" => Ok(Shift::Stable),
        _ => Err(RecordError::InvalidShift {
            value: text.to_string(),
        }),
    }
}
