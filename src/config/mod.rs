//! Configuration layer for post-to-slack.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **CLI arguments** - including their `FL_POST_TO_SLACK_*` environment bindings
//! 2. **TOML config file**
//! 3. **`SLACK_API_TOKEN`** - for the token only
//! 4. **Built-in defaults**
//!
//! Payload entries from the CLI override TOML entries with the same key and
//! are appended otherwise. CLI attachment properties (a JSON object) are
//! deep-merged over the TOML `[attachment_properties]` table.
//!
//! # Default Payloads
//!
//! Absent everywhere means every built-in field. `--no-default-payloads`
//! or `default_payloads = []` suppresses them all.
//!
//! # Boolean Flag Semantics
//!
//! `--hide-author-on-success` uses OR semantics with the TOML setting.
//! `--success` takes an explicit value and overrides TOML.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command, DefaultPayloadArg};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
