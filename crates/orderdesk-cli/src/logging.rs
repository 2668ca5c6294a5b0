// Logging setup
//
// Events go to stderr so stdout carries only the JSON envelopes.

use tracing::Level;

use crate::error::{CliError, CliResult};

/// Resolve the effective level: `--quiet` wins over `--verbose`, which wins over config
pub fn resolve_level(configured: &str, verbose: bool, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    if verbose {
        return Level::DEBUG;
    }
    match configured.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global subscriber; fails if one is already installed
pub fn init_logging(level: Level) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(level >= Level::DEBUG)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
