//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::message::{DefaultPayload, DefaultPayloads, NotificationRequest, merge_maps};
use crate::slack::ApiToken;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// `Debug` and `Display` never show the API token.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// The notification to format and deliver
    pub request: NotificationRequest,

    /// Lane name for the Lane field
    pub lane: Option<String>,

    /// Git repository to read facts from; `None` means the working directory
    pub repository: Option<PathBuf>,

    /// Dry-run mode (print the body without sending)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = &self.request;
        write!(
            f,
            "Config {{ channel: {}, success: {}, default_payloads: {}, payload: {} field(s), \
             attachment_properties: {} key(s), lane: {}, dry_run: {} }}",
            request.channel.as_deref().unwrap_or("default"),
            request.success,
            request.default_payloads,
            request.payload.len(),
            request.attachment_properties.len(),
            self.lane.as_deref().unwrap_or("none"),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (including their environment bindings) take precedence
    /// over TOML values. The token falls back to `SLACK_API_TOKEN` last.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No API token is configured, or it is not a valid header value
    /// - A payload entry is malformed
    /// - A default payload name is unknown
    /// - Attachment properties are not a JSON object
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        Self::from_sources(cli, toml, |name| std::env::var(name).ok())
    }

    /// Like [`from_raw`](Self::from_raw), reading the token fallback
    /// through `env` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`from_raw`](Self::from_raw).
    pub fn from_sources(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_token = Self::resolve_api_token(cli, toml, env)?;
        let payload = Self::resolve_payload(cli, toml)?;
        let default_payloads = Self::resolve_default_payloads(cli, toml)?;
        let attachment_properties = Self::resolve_attachment_properties(cli, toml)?;

        let message_section = toml.map(|t| &t.message);

        let request = NotificationRequest {
            api_token,
            channel: cli
                .channel
                .clone()
                .or_else(|| toml.and_then(|t| t.slack.channel.clone())),
            message: cli
                .message
                .clone()
                .or_else(|| message_section.and_then(|m| m.text.clone())),
            pretext: cli
                .pretext
                .clone()
                .or_else(|| message_section.and_then(|m| m.pretext.clone())),
            payload,
            default_payloads,
            attachment_properties,
            // Priority: CLI explicit > TOML > default
            success: cli
                .success
                .or_else(|| message_section.and_then(|m| m.success))
                .unwrap_or(defaults::SUCCESS),
            // Flags only enable
            hide_author_on_success: cli.hide_author_on_success
                || message_section.is_some_and(|m| m.hide_author_on_success),
        };

        Ok(Self {
            request,
            lane: cli
                .lane
                .clone()
                .or_else(|| toml.and_then(|t| t.build.lane.clone())),
            repository: cli
                .repository
                .clone()
                .or_else(|| toml.and_then(|t| t.build.repository.as_ref().map(PathBuf::from))),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_api_token(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ApiToken, ConfigError> {
        // A blank value at one level falls through to the next
        let token = usable_token(cli.api_token.as_deref())
            .or_else(|| usable_token(toml.and_then(|t| t.slack.api_token.as_deref())))
            .or_else(|| usable_token(env(defaults::TOKEN_FALLBACK_ENV).as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::API_TOKEN,
                    "Use --api-token, set FL_POST_TO_SLACK_BOT_TOKEN or SLACK_API_TOKEN, \
                     or set slack.api_token in config file",
                )
            })?;

        token
            .bearer_header()
            .map_err(|_| ConfigError::InvalidToken)?;

        Ok(token)
    }

    fn resolve_payload(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Map<String, Value>, ConfigError> {
        // TOML entries first; CLI entries override per key
        let mut payload = toml.map(|t| t.payload.clone()).unwrap_or_default();

        for entry in &cli.payload {
            let (key, value) = parse_payload_entry(entry)?;
            payload.insert(key, Value::String(value));
        }

        Ok(payload)
    }

    fn resolve_default_payloads(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<DefaultPayloads, ConfigError> {
        if cli.no_default_payloads {
            return Ok(DefaultPayloads::none());
        }

        if let Some(ref selected) = cli.default_payloads {
            return Ok(DefaultPayloads::only(
                selected.iter().copied().map(DefaultPayload::from),
            ));
        }

        let Some(names) = toml.and_then(|t| t.message.default_payloads.as_ref()) else {
            return Ok(DefaultPayloads::All);
        };

        let payloads = names
            .iter()
            .map(|name| {
                name.parse::<DefaultPayload>()
                    .map_err(|_| ConfigError::InvalidDefaultPayload {
                        value: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DefaultPayloads::only(payloads))
    }

    fn resolve_attachment_properties(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Map<String, Value>, ConfigError> {
        let mut properties = toml
            .map(|t| t.attachment_properties.clone())
            .unwrap_or_default();

        // CLI JSON is deep-merged over the TOML table
        if let Some(ref json) = cli.attachment_properties {
            merge_maps(&mut properties, parse_attachment_properties(json)?);
        }

        Ok(properties)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn usable_token(value: Option<&str>) -> Option<ApiToken> {
    value
        .map(|v| ApiToken::new(v.trim()))
        .filter(|token| !token.is_blank())
}

fn parse_payload_entry(s: &str) -> Result<(String, String), ConfigError> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ConfigError::InvalidPayload {
            value: s.to_string(),
        }),
    }
}

fn parse_attachment_properties(json: &str) -> Result<Map<String, Value>, ConfigError> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ConfigError::InvalidAttachmentProperties {
            reason: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
        Err(e) => Err(ConfigError::InvalidAttachmentProperties {
            reason: e.to_string(),
        }),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
