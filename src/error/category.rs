//! Error category classification for unified error handling.
//!
//! Categories decide how the dashboard reacts: data problems shrink a view,
//! selection problems are ignored, configuration and system problems stop
//! startup.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A single record or summary value is malformed.
    /// The offending item is excluded; the session continues.
    Data,

    /// An inbound selection event named something that does not exist.
    /// Rejected without changing state.
    Selection,

    /// Configuration errors (bad flags, bad environment values).
    /// Not retryable until the configuration is corrected.
    Configuration,

    /// System/OS errors (filesystem, permissions).
    System,
}

impl ErrorCategory {
    /// Returns true if the dashboard keeps running after this kind of error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCategory::Data | ErrorCategory::Selection)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Data => "data",
            ErrorCategory::Selection => "selection",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Data => "Malformed mood data",
            ErrorCategory::Selection => "Invalid selection",
            ErrorCategory::Configuration => "Configuration problem",
            ErrorCategory::System => "System error",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Data => "Fix the listed records in the dataset file",
            ErrorCategory::Selection => "Choose one of: pie, bar, area, line, radial",
            ErrorCategory::Configuration => "Check your flags and MOODSCOPE_* variables",
            ErrorCategory::System => "Check the file path and its permissions",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_recoverable() {
        assert!(ErrorCategory::Data.is_recoverable());
        assert!(ErrorCategory::Selection.is_recoverable());
        assert!(!ErrorCategory::Configuration.is_recoverable());
        assert!(!ErrorCategory::System.is_recoverable());
    }

    #[test]
    fn test_category_as_str() {
        assert_eq!(ErrorCategory::Data.as_str(), "data");
        assert_eq!(ErrorCategory::Selection.as_str(), "selection");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
        assert_eq!(ErrorCategory::System.as_str(), "system");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Selection), "selection");
    }

    #[test]
    fn test_recovery_hint_names_views() {
        assert!(ErrorCategory::Selection.recovery_hint().contains("radial"));
    }
}
