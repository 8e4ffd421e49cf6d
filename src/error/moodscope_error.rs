//! Unified error type for fallible moodscope operations.
//!
//! Per-record problems and integrity warnings are *not* errors at this level:
//! they are collected into reports so a session never aborts because of bad
//! data. `MoodscopeError` covers the operations that genuinely fail: reading
//! files, parsing a dataset document, configuration and selection payloads.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;
use super::selection::SelectionError;

#[derive(Debug, Error)]
pub enum MoodscopeError {
    /// Reading a dataset or opening the log file failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset document is not valid JSON for the expected shape.
    #[error("invalid dataset `{origin}`: {source}")]
    Dataset {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding output (e.g. the headless dump) failed.
    #[error("cannot encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// Invalid flag or environment value.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Rejected chart-view selection.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Logging could not be initialised.
    #[error("cannot initialise logging: {message}")]
    Logging { message: String },
}

impl MoodscopeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MoodscopeError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        MoodscopeError::Config {
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            MoodscopeError::Io { .. } | MoodscopeError::Logging { .. } => ErrorCategory::System,
            MoodscopeError::Dataset { .. } | MoodscopeError::Encode(_) => ErrorCategory::Data,
            MoodscopeError::Config { .. } => ErrorCategory::Configuration,
            MoodscopeError::Selection(_) => ErrorCategory::Selection,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            MoodscopeError::Io { .. } => "IO",
            MoodscopeError::Dataset { .. } => "DATASET_PARSE",
            MoodscopeError::Encode(_) => "ENCODE",
            MoodscopeError::Config { .. } => "CONFIG",
            MoodscopeError::Selection(err) => err.error_code(),
            MoodscopeError::Logging { .. } => "LOGGING",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        format!("{}. {}", self, self.category().recovery_hint())
    }
}

/// Type alias for Results using MoodscopeError.
pub type MoodscopeResult<T> = Result<T, MoodscopeError>;
