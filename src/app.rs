//! Process-level glue for the binary: exit statuses, log output and hints.

use std::process::ExitCode;

use post_to_slack::config::{ConfigError, field};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// How the process ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The notification was handled. A delivery failure has already been
    /// reported and still ends here.
    Done,
    /// Arguments, environment or the config file were unusable (code 1).
    Config,
    /// The runtime could not start or the dry-run body could not be
    /// rendered (code 2).
    Runtime,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Done => Self::SUCCESS,
            Exit::Config => Self::FAILURE,
            Exit::Runtime => Self::from(2),
        }
    }
}

/// Suggests a next step for configuration errors the user can fix directly.
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::API_TOKEN => {
            Some("Create a bot token at https://api.slack.com/apps with the chat:write scope.")
        }
        ConfigError::FileRead { .. } => {
            Some("Run 'post-to-slack init' to generate a configuration template.")
        }
        _ => None,
    }
}

/// Installs the log subscriber, writing to stderr.
///
/// `RUST_LOG` directives are layered over `info`, or `debug` with `--verbose`.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
