// Integration tests for configuration from the process environment and
// command-line flags. Environment-mutating tests run serially.

use std::env;
use std::path::PathBuf;

use moodscope::chart::ChartView;
use moodscope::cli::{dump, parse_args, CliCommand, CliOptions};
use moodscope::config::{DashboardConfig, ENV_DATA, ENV_LOG_FILE, ENV_VIEW};
use moodscope::error::MoodscopeError;
use serial_test::serial;
use tempfile::TempDir;

/// Clears the moodscope variables before and after a test
struct EnvGuard;

impl EnvGuard {
    fn new() -> Self {
        Self::clear();
        EnvGuard
    }

    fn clear() {
        for key in [ENV_DATA, ENV_VIEW, ENV_LOG_FILE] {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        Self::clear();
    }
}

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    std::iter::once("moodscope".to_string())
        .chain(list.iter().map(|s| s.to_string()))
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    let _guard = EnvGuard::new();
    let config = DashboardConfig::from_env().unwrap();
    assert_eq!(config, DashboardConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    let _guard = EnvGuard::new();
    env::set_var(ENV_DATA, "/data/moods.json");
    env::set_var(ENV_VIEW, "radial");
    env::set_var(ENV_LOG_FILE, "/tmp/moodscope-test.log");

    let config = DashboardConfig::from_env().unwrap();
    assert_eq!(config.data_path, Some(PathBuf::from("/data/moods.json")));
    assert_eq!(config.initial_view, ChartView::Radial);
    assert_eq!(
        config.resolved_log_path(),
        Some(PathBuf::from("/tmp/moodscope-test.log"))
    );
}

#[test]
#[serial]
fn test_bad_env_view_is_config_error() {
    let _guard = EnvGuard::new();
    env::set_var(ENV_VIEW, "donut");
    let err = DashboardConfig::from_env().unwrap_err();
    assert!(matches!(err, MoodscopeError::Config { .. }));
    assert!(err.to_string().contains(ENV_VIEW));
}

#[test]
#[serial]
fn test_flags_override_env() {
    let _guard = EnvGuard::new();
    env::set_var(ENV_VIEW, "bar");

    let command = parse_args(args(&["--view", "area", "--data=/other.json"])).unwrap();
    let CliCommand::RunTui(options) = command else {
        panic!("expected the TUI command");
    };
    let config = DashboardConfig::from_env().unwrap().apply_cli(&options).unwrap();
    assert_eq!(config.initial_view, ChartView::Area);
    assert_eq!(config.data_path, Some(PathBuf::from("/other.json")));
}

#[test]
#[serial]
fn test_dump_reads_dataset_from_env() {
    let _guard = EnvGuard::new();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("moods.json");
    std::fs::write(
        &path,
        r#"{"distribution":[{"category":"Calm","share":100}]}"#,
    )
    .unwrap();
    env::set_var(ENV_DATA, &path);

    let json = dump(&CliOptions {
        data: None,
        view: Some("bar".to_string()),
    })
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["view"], "bar");
    assert_eq!(value["chart"]["encoding"]["bars"][0]["tooltip"], "Calm: 100%");
    assert_eq!(value["log"]["rows"].as_array().map(Vec::len), Some(0));
}

#[test]
#[serial]
fn test_dump_rejects_unknown_view() {
    let _guard = EnvGuard::new();
    let err = dump(&CliOptions {
        data: None,
        view: Some("donut".to_string()),
    })
    .unwrap_err();
    assert_eq!(err.error_code(), "SELECT_UNKNOWN_VIEW");
}
