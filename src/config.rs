//! Dashboard configuration.
//!
//! Layered: defaults, then `MOODSCOPE_*` environment variables, then CLI
//! flags. Each layer only overrides what it sets.

use std::path::PathBuf;

use crate::analytics::DEFAULT_SHARE_TOLERANCE;
use crate::chart::ChartView;
use crate::cli::CliOptions;
use crate::error::{MoodscopeError, MoodscopeResult};
use crate::table::DEFAULT_NOTES_WIDTH;

/// Dataset file to load instead of the built-in seed
pub const ENV_DATA: &str = "MOODSCOPE_DATA";
/// Initial chart view name
pub const ENV_VIEW: &str = "MOODSCOPE_VIEW";
/// Log file path
pub const ENV_LOG_FILE: &str = "MOODSCOPE_LOG_FILE";

/// Configuration for a dashboard session.
///
/// # Example
///
/// ```
/// use moodscope::chart::ChartView;
/// use moodscope::config::DashboardConfig;
///
/// let config = DashboardConfig::default()
///     .with_initial_view(ChartView::Bar)
///     .with_notes_width(24);
/// assert_eq!(config.initial_view, ChartView::Bar);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Dataset file; the built-in seed when `None`
    pub data_path: Option<PathBuf>,
    /// View shown at startup (default: Pie)
    pub initial_view: ChartView,
    /// Log file; `<cache dir>/moodscope/moodscope.log` when `None`
    pub log_path: Option<PathBuf>,
    /// Notes column width in terminal columns (default: 32)
    pub notes_width: usize,
    /// Allowed distance of the share total from 100 (default: 5.0)
    pub share_tolerance: f64,
    /// Event poll tick in milliseconds (default: 250)
    pub tick_rate_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            initial_view: ChartView::Pie,
            log_path: None,
            notes_width: DEFAULT_NOTES_WIDTH,
            share_tolerance: DEFAULT_SHARE_TOLERANCE,
            tick_rate_ms: 250,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    pub fn with_initial_view(mut self, view: ChartView) -> Self {
        self.initial_view = view;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_notes_width(mut self, width: usize) -> Self {
        self.notes_width = width;
        self
    }

    pub fn with_share_tolerance(mut self, tolerance: f64) -> Self {
        self.share_tolerance = tolerance;
        self
    }

    pub fn with_tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.tick_rate_ms = tick_rate_ms;
        self
    }

    /// Defaults overlaid with the process environment
    pub fn from_env() -> MoodscopeResult<Self> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Overlay values from an environment lookup. Empty values are ignored.
    pub fn apply_env<F>(mut self, lookup: F) -> MoodscopeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(ENV_DATA) {
            self.data_path = Some(PathBuf::from(path));
        }
        if let Some(name) = get(ENV_VIEW) {
            self.initial_view = name
                .parse()
                .map_err(|e| MoodscopeError::config(format!("{}: {}", ENV_VIEW, e)))?;
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            self.log_path = Some(PathBuf::from(path));
        }
        Ok(self)
    }

    /// Overlay parsed command-line flags. An unknown `--view` is rejected and
    /// leaves the configuration untouched.
    pub fn apply_cli(mut self, options: &CliOptions) -> MoodscopeResult<Self> {
        if let Some(name) = &options.view {
            self.initial_view = name.parse::<ChartView>()?;
        }
        if let Some(path) = &options.data {
            self.data_path = Some(path.clone());
        }
        Ok(self)
    }

    /// Log file in effect: explicit path, else the per-user cache location
    pub fn resolved_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(default_log_path)
    }
}

/// `<cache dir>/moodscope/moodscope.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("moodscope").join("moodscope.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.initial_view, ChartView::Pie);
        assert_eq!(config.notes_width, 32);
        assert_eq!(config.share_tolerance, 5.0);
        assert_eq!(config.tick_rate_ms, 250);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_env_layer() {
        let config = DashboardConfig::default()
            .apply_env(env(&[
                (ENV_DATA, "/tmp/moods.json"),
                (ENV_VIEW, "Line"),
                (ENV_LOG_FILE, ""),
            ]))
            .unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/moods.json")));
        assert_eq!(config.initial_view, ChartView::Line);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_env_bad_view_is_config_error() {
        let err = DashboardConfig::default()
            .apply_env(env(&[(ENV_VIEW, "donut")]))
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG");
        assert!(err.to_string().contains(ENV_VIEW));
    }

    #[test]
    fn test_cli_overrides_env() {
        let config = DashboardConfig::default()
            .apply_env(env(&[(ENV_VIEW, "line")]))
            .unwrap()
            .apply_cli(&CliOptions {
                view: Some("radial".to_string()),
                data: None,
            })
            .unwrap();
        assert_eq!(config.initial_view, ChartView::Radial);
    }

    #[test]
    fn test_cli_bad_view_rejected() {
        let err = DashboardConfig::default()
            .apply_cli(&CliOptions {
                view: Some("INVALID".to_string()),
                data: None,
            })
            .unwrap_err();
        assert_eq!(err.error_code(), "SELECT_UNKNOWN_VIEW");
    }

    #[test]
    fn test_explicit_log_path_wins() {
        let config = DashboardConfig::default().with_log_path("/tmp/m.log");
        assert_eq!(config.resolved_log_path(), Some(PathBuf::from("/tmp/m.log")));
    }
}
