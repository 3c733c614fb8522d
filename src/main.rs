//! post-to-slack
//!
//! Entry point for the post-to-slack application.

use post_to_slack::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{Exit, config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if let Some(hint) = config_hint(&e) {
                eprintln!("\n{hint}");
            }
            return Exit::Config.into();
        }
    };

    setup_tracing(config.verbose);
    tracing::info!("{config}");

    run_application(config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            Exit::Done.into()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Exit::Config.into()
        }
    }
}

/// Runs the single notification on a current-thread runtime.
///
/// Delivery failures are reported and still exit successfully.
#[cfg(not(tarpaulin_include))]
fn run_application(config: ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return Exit::Runtime.into();
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(()) => Exit::Done.into(),
        Err(e) => {
            tracing::error!("Application error: {e}");
            Exit::Runtime.into()
        }
    }
}
