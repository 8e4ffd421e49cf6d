//! Version and usage text.

/// The current version of moodscope, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`
pub const USAGE: &str = "\
moodscope - terminal wellness dashboard

USAGE:
    moodscope [OPTIONS]

OPTIONS:
    -d, --data <PATH>    Load a dataset file instead of the built-in seed
    -v, --view <NAME>    Initial chart view: pie, bar, area, line, radial
        --dump           Print the rendered dashboard as JSON and exit
    -V, --version        Print version
    -h, --help           Print this help

ENVIRONMENT:
    MOODSCOPE_DATA       Same as --data
    MOODSCOPE_VIEW       Same as --view
    MOODSCOPE_LOG_FILE   Log file path
    MOODSCOPE_LOG        Log filter (default: info)

KEYS:
    1-5 select view   left/right or h/l cycle view   s cycle sort   q quit";

/// `moodscope <version>`
pub fn version_line() -> String {
    format!("moodscope {}", VERSION)
}
