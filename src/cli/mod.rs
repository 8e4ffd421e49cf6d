//! CLI module for moodscope.
//!
//! Handles the flags that finish without entering the terminal UI:
//! `--version`, `--help` and `--dump`.
//!
//! # Usage
//!
//! ```ignore
//! use moodscope::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions};
pub use version::{version_line, USAGE, VERSION};

use crate::app::App;
use crate::config::DashboardConfig;
use crate::error::MoodscopeResult;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: &CliCommand) -> Option<MoodscopeResult<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Dump(options) => Some(dump(options).map(|json| println!("{}", json))),
        CliCommand::RunTui(_) => None,
    }
}

/// Render the dashboard headlessly and return it as pretty JSON
pub fn dump(options: &CliOptions) -> MoodscopeResult<String> {
    let config = DashboardConfig::from_env()?.apply_cli(options)?;
    dump_with_config(config)
}

/// Same as [`dump`] with an explicit configuration
pub fn dump_with_config(config: DashboardConfig) -> MoodscopeResult<String> {
    let app = App::new(config)?;
    Ok(app.snapshot().to_json()?)
}
