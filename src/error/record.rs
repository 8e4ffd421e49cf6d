//! Per-record validation errors.
//!
//! A `RecordError` never aborts a load: the record is dropped and the error
//! is kept in the store's load report.

use thiserror::Error;

/// Why a single observation was excluded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("intensity {value} is outside 0..=10")]
    IntensityOutOfRange { value: i64 },

    #[error("unparseable date `{value}` (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("unparseable time `{value}` (expected HH:MM or h:MM AM/PM, optional zone)")]
    InvalidTime { value: String },

    #[error("unknown shift `{value}` (expected up, down or stable)")]
    InvalidShift { value: String },

    #[error("duplicate id `{id}`")]
    DuplicateId { id: String },

    #[error("record does not have the observation shape")]
    Malformed,
}

impl RecordError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::MissingField { .. } => "RECORD_MISSING_FIELD",
            RecordError::IntensityOutOfRange { .. } => "RECORD_INTENSITY_RANGE",
            RecordError::InvalidDate { .. } => "RECORD_INVALID_DATE",
            RecordError::InvalidTime { .. } => "RECORD_INVALID_TIME",
            RecordError::InvalidShift { .. } => "RECORD_INVALID_SHIFT",
            RecordError::DuplicateId { .. } => "RECORD_DUPLICATE_ID",
            RecordError::Malformed => "RECORD_MALFORMED",
        }
    }
}
