//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Slack connection section
    #[serde(default)]
    pub slack: SlackSection,

    /// Message content section
    #[serde(default)]
    pub message: MessageSection,

    /// Extra attachment fields, in file order
    #[serde(default)]
    pub payload: Map<String, Value>,

    /// Properties deep-merged into the attachment
    #[serde(default)]
    pub attachment_properties: Map<String, Value>,

    /// Build environment section
    #[serde(default)]
    pub build: BuildSection,
}

/// Slack connection section.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlackSection {
    /// Bot token
    pub api_token: Option<String>,

    /// `#channel` or `@user`
    pub channel: Option<String>,
}

impl std::fmt::Debug for SlackSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackSection")
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("channel", &self.channel)
            .finish()
    }
}

/// Message content section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Message text
    pub text: Option<String>,

    /// Text above the attachment block
    pub pretext: Option<String>,

    /// Whether the build succeeded
    pub success: Option<bool>,

    /// Whitelist of built-in fields; omit for all, `[]` for none
    pub default_payloads: Option<Vec<String>>,

    /// Only show the git author when the build failed
    #[serde(default)]
    pub hide_author_on_success: bool,
}

/// Build environment section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Lane name
    pub lane: Option<String>,

    /// Git repository path
    pub repository: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# post-to-slack configuration file

[slack]
# Slack bot token (required). Prefer the FL_POST_TO_SLACK_BOT_TOKEN or
# SLACK_API_TOKEN environment variables over storing it here.
# api_token = "xoxb-..."

# "#channel" or "@username". A bare name is treated as a channel.
# channel = "#releases"

[message]
# The message that should be displayed on Slack. "\n" starts a new line.
# text = "App successfully released!"

# Optional text above the attachment block (supports Slack markup)
# pretext = ""

# Was the build successful? Controls the color and the Result field.
success = true

# Built-in fields to include. Omit to include all of them, or use [] for none.
# Available: lane, test_result, git_branch, git_author, last_git_commit,
# last_git_commit_hash
# default_payloads = ["git_branch", "git_author"]

# Only show the git author when the build failed
# hide_author_on_success = false

[payload]
# Extra fields, shown in this order
# "Built by" = "Jenkins"

[attachment_properties]
# Deep-merged into the attachment; see https://api.slack.com/docs/attachments
# Arrays such as `fields` are appended to, not replaced.
# thumb_url = "http://example.com/path/to/thumb.png"
#
# [[attachment_properties.fields]]
# title = "My Field"
# value = "My Value"
# short = true

[build]
# Lane name shown in the Lane field
# lane = "beta"

# Git repository to read branch and commit facts from (default: current directory)
# repository = "."
"##
    .to_string()
}
