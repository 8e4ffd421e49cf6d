//! Command-line argument parsing for moodscope.
//!
//! Parses the flags and decides which command to run. Values are kept as
//! given; the configuration layer validates them.

use std::path::PathBuf;

use crate::error::{MoodscopeError, MoodscopeResult};

/// Flags that feed the dashboard configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// `--data <path>`
    pub data: Option<PathBuf>,
    /// `--view <name>`
    pub view: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the rendered dashboard as JSON and exit
    Dump(CliOptions),
    /// Run the TUI application (default)
    RunTui(CliOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use moodscope::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["moodscope".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> MoodscopeResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut dump = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--dump" => dump = true,
            "--data" | "-d" => {
                options.data = Some(PathBuf::from(value_for(&arg, args.next())?));
            }
            "--view" | "-v" => {
                options.view = Some(value_for(&arg, args.next())?);
            }
            other => {
                if let Some(path) = other.strip_prefix("--data=") {
                    options.data = Some(PathBuf::from(path));
                } else if let Some(view) = other.strip_prefix("--view=") {
                    options.view = Some(view.to_string());
                } else {
                    return Err(MoodscopeError::config(format!(
                        "unknown argument `{}` (see --help)",
                        other
                    )));
                }
            }
        }
    }

    Ok(if dump {
        CliCommand::Dump(options)
    } else {
        CliCommand::RunTui(options)
    })
}

fn value_for(flag: &str, value: Option<String>) -> MoodscopeResult<String> {
    value
        .filter(|v| !v.starts_with("--"))
        .ok_or_else(|| MoodscopeError::config(format!("{} requires a value", flag)))
}
