//! Errors for inbound chart-view selection events.

use thiserror::Error;

/// A "select chart view" payload that names no view.
///
/// The controller state is left untouched when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown chart view `{payload}`")]
    UnknownView { payload: String },

    #[error("chart view index {index} is out of range 1..=5")]
    IndexOutOfRange { index: usize },
}

impl SelectionError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SelectionError::UnknownView { .. } => "SELECT_UNKNOWN_VIEW",
            SelectionError::IndexOutOfRange { .. } => "SELECT_INDEX_RANGE",
        }
    }
}
