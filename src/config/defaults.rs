//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

/// Default value of the `success` flag.
pub const SUCCESS: bool = true;

/// Environment variable consulted when no token is configured elsewhere.
pub const TOKEN_FALLBACK_ENV: &str = "SLACK_API_TOKEN";

/// Default output path of the `init` subcommand.
pub const CONFIG_FILE: &str = "post-to-slack.toml";
