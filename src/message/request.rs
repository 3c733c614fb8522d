//! The notification request and its default-payload selection.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::slack::ApiToken;

/// A built-in attachment field derived from the build environment.
///
/// Variants are declared in canonical order; fields are always emitted
/// in this order regardless of how the selection was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DefaultPayload {
    /// Name of the lane that posted the message
    Lane,
    /// `Success` or `Error`, from the request's success flag
    TestResult,
    /// Current git branch
    GitBranch,
    /// Author email of the last commit
    GitAuthor,
    /// Message of the last commit
    LastGitCommit,
    /// Short hash of the last commit
    LastGitCommitHash,
}

impl DefaultPayload {
    /// Every default payload, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Lane,
        Self::TestResult,
        Self::GitBranch,
        Self::GitAuthor,
        Self::LastGitCommit,
        Self::LastGitCommitHash,
    ];

    /// The name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lane => "lane",
            Self::TestResult => "test_result",
            Self::GitBranch => "git_branch",
            Self::GitAuthor => "git_author",
            Self::LastGitCommit => "last_git_commit",
            Self::LastGitCommitHash => "last_git_commit_hash",
        }
    }
}

impl fmt::Display for DefaultPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown default payload name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown default payload '{0}'")]
pub struct UnknownPayload(pub String);

impl FromStr for DefaultPayload {
    type Err = UnknownPayload;

    /// Parses a payload name. A leading `:` is accepted so that names
    /// copied from lane files (`:git_branch`) work unchanged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix(':').unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownPayload(s.to_string()))
    }
}

/// Which built-in fields are added to the attachment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DefaultPayloads {
    /// Every built-in field (the selection was not specified).
    #[default]
    All,
    /// Only the listed fields; an empty set suppresses all of them.
    Only(BTreeSet<DefaultPayload>),
}

impl DefaultPayloads {
    /// Selection that suppresses every built-in field.
    #[must_use]
    pub const fn none() -> Self {
        Self::Only(BTreeSet::new())
    }

    /// Selection restricted to the given payloads. Duplicates are ignored.
    #[must_use]
    pub fn only(payloads: impl IntoIterator<Item = DefaultPayload>) -> Self {
        Self::Only(payloads.into_iter().collect())
    }

    /// Returns true if the payload is selected.
    #[must_use]
    pub fn includes(&self, payload: DefaultPayload) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(&payload),
        }
    }

    /// Iterates over the selected payloads in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = DefaultPayload> + '_ {
        DefaultPayload::ALL
            .into_iter()
            .filter(move |p| self.includes(*p))
    }
}

impl fmt::Display for DefaultPayloads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(set) if set.is_empty() => f.write_str("none"),
            Self::Only(_) => {
                let names: Vec<&str> = self.iter().map(DefaultPayload::as_str).collect();
                f.write_str(&names.join(","))
            }
        }
    }
}

/// Everything needed to build and deliver one notification.
///
/// Exists for a single invocation only. `Debug` is safe to log: the
/// token is redacted.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    /// Bot token used for the `Authorization` header
    pub api_token: ApiToken,
    /// `#channel` or `@user`; a bare name is treated as a channel
    pub channel: Option<String>,
    /// Main message text
    pub message: Option<String>,
    /// Text shown above the attachment block
    pub pretext: Option<String>,
    /// Extra fields, rendered in insertion order
    pub payload: Map<String, Value>,
    /// Built-in field selection
    pub default_payloads: DefaultPayloads,
    /// Properties deep-merged over the generated attachment
    pub attachment_properties: Map<String, Value>,
    /// Whether the reported build succeeded
    pub success: bool,
    /// Omit the git author field when the build succeeded
    pub hide_author_on_success: bool,
}

impl NotificationRequest {
    /// Creates a request with the given token and default settings.
    ///
    /// Defaults: no channel, message or pretext, empty payload and
    /// attachment properties, all default payloads, `success = true`.
    #[must_use]
    pub fn new(api_token: ApiToken) -> Self {
        Self {
            api_token,
            channel: None,
            message: None,
            pretext: None,
            payload: Map::new(),
            default_payloads: DefaultPayloads::All,
            attachment_properties: Map::new(),
            success: true,
            hide_author_on_success: false,
        }
    }

    /// Sets the target channel or user.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Sets the message text.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the pretext.
    #[must_use]
    pub fn with_pretext(mut self, pretext: impl Into<String>) -> Self {
        self.pretext = Some(pretext.into());
        self
    }

    /// Appends (or replaces) a payload entry.
    #[must_use]
    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Sets the default payload selection.
    #[must_use]
    pub fn with_default_payloads(mut self, selection: DefaultPayloads) -> Self {
        self.default_payloads = selection;
        self
    }

    /// Sets the attachment properties.
    #[must_use]
    pub fn with_attachment_properties(mut self, properties: Map<String, Value>) -> Self {
        self.attachment_properties = properties;
        self
    }

    /// Sets the success flag.
    #[must_use]
    pub const fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    /// Sets whether the author is hidden on success.
    #[must_use]
    pub const fn with_hide_author_on_success(mut self, hide: bool) -> Self {
        self.hide_author_on_success = hide;
        self
    }
}
