//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations. Messages
/// never include the API token.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI, environment or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// The token cannot be sent in an HTTP header.
    #[error("Invalid API token: contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// A `--payload` entry is not in `KEY=VALUE` form.
    #[error("Invalid payload entry '{value}': expected 'KEY=VALUE'")]
    InvalidPayload {
        /// The invalid entry
        value: String,
    },

    /// An unknown default payload name.
    #[error(
        "Invalid default payload '{value}': expected one of lane, test_result, git_branch, \
         git_author, last_git_commit, last_git_commit_hash"
    )]
    InvalidDefaultPayload {
        /// The invalid name
        value: String,
    },

    /// Attachment properties are not a JSON object.
    #[error("Invalid attachment properties: {reason}")]
    InvalidAttachmentProperties {
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The Slack bot token field.
    pub const API_TOKEN: &str = "api_token";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
