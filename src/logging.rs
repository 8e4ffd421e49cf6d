//! Structured logging to a file.
//!
//! The terminal belongs to the UI, so events go to a log file filtered by
//! `MOODSCOPE_LOG` (an `EnvFilter` directive, default `info`).

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::DashboardConfig;
use crate::error::{MoodscopeError, MoodscopeResult};

/// Environment variable holding the log filter
pub const ENV_LOG_FILTER: &str = "MOODSCOPE_LOG";

const DEFAULT_FILTER: &str = "info";

/// Filter from `MOODSCOPE_LOG`, falling back to `info`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns the file in use, or `None` when no location could be resolved.
/// Callers treat an error as non-fatal.
pub fn init_logging(config: &DashboardConfig) -> MoodscopeResult<Option<PathBuf>> {
    let Some(path) = config.resolved_log_path() else {
        return Ok(None);
    };
    init_file_logging(&path)?;
    tracing::info!(version = crate::cli::VERSION, path = %path.display(), "logging started");
    Ok(Some(path))
}

fn init_file_logging(path: &Path) -> MoodscopeResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MoodscopeError::io(parent, e))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| MoodscopeError::io(path, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| MoodscopeError::Logging {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_unwritable_location_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let config = DashboardConfig::default().with_log_path(blocker.join("moodscope.log"));
        let err = init_logging(&config).unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::System);
    }

    #[test]
    #[serial]
    fn test_default_filter_when_env_unset() {
        std::env::remove_var(ENV_LOG_FILTER);
        assert_eq!(env_filter().to_string(), "info");
    }
}
