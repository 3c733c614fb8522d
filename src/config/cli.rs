//! CLI argument parsing using clap.
//!
//! Every message option can also be set through the environment variable
//! named in its help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::message::DefaultPayload;

use super::defaults;

/// Post a Slack message to any #channel or @user using the bot
/// `chat.postMessage` API.
#[derive(Debug, Parser)]
#[command(name = "post-to-slack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Slack bot token (falls back to SLACK_API_TOKEN)
    #[arg(
        long = "api-token",
        env = "FL_POST_TO_SLACK_BOT_TOKEN",
        hide_env_values = true
    )]
    pub api_token: Option<String>,

    /// #channel or @username
    #[arg(long, env = "FL_POST_TO_SLACK_CHANNEL")]
    pub channel: Option<String>,

    /// Text shown above the attachment block (supports Slack markup)
    #[arg(long, env = "FL_POST_TO_SLACK_PRETEXT")]
    pub pretext: Option<String>,

    /// The message to display
    #[arg(long, env = "FL_POST_TO_SLACK_MESSAGE")]
    pub message: Option<String>,

    /// Additional field as 'KEY=VALUE' (can be specified multiple times)
    #[arg(long = "payload", value_name = "KEY=VALUE")]
    pub payload: Vec<String>,

    /// Whitelist of built-in fields, comma separated
    #[arg(
        long = "default-payloads",
        value_enum,
        value_delimiter = ',',
        env = "FL_POST_TO_SLACK_DEFAULT_PAYLOADS",
        conflicts_with = "no_default_payloads"
    )]
    pub default_payloads: Option<Vec<DefaultPayloadArg>>,

    /// Suppress every built-in field
    #[arg(long = "no-default-payloads")]
    pub no_default_payloads: bool,

    /// JSON object deep-merged into the attachment
    #[arg(
        long = "attachment-properties",
        value_name = "JSON",
        env = "FL_POST_TO_SLACK_ATTACHMENT_PROPERTIES"
    )]
    pub attachment_properties: Option<String>,

    /// Whether the build succeeded (true/false)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, env = "FL_POST_TO_SLACK_SUCCESS")]
    pub success: Option<bool>,

    /// Only show the git author when the build failed
    #[arg(
        long = "hide-author-on-success",
        env = "FASTLANE_SLACK_HIDE_AUTHOR_ON_SUCCESS"
    )]
    pub hide_author_on_success: bool,

    /// Lane name shown in the Lane field
    #[arg(long)]
    pub lane: Option<String>,

    /// Git repository to read branch and commit facts from
    #[arg(long, value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print the request body instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for post-to-slack
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Default payload argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DefaultPayloadArg {
    /// Lane name
    #[value(name = "lane")]
    Lane,
    /// Success or Error
    #[value(name = "test_result")]
    TestResult,
    /// Current git branch
    #[value(name = "git_branch")]
    GitBranch,
    /// Last commit author
    #[value(name = "git_author")]
    GitAuthor,
    /// Last commit message
    #[value(name = "last_git_commit")]
    LastGitCommit,
    /// Last commit short hash
    #[value(name = "last_git_commit_hash")]
    LastGitCommitHash,
}

impl From<DefaultPayloadArg> for DefaultPayload {
    fn from(arg: DefaultPayloadArg) -> Self {
        match arg {
            DefaultPayloadArg::Lane => Self::Lane,
            DefaultPayloadArg::TestResult => Self::TestResult,
            DefaultPayloadArg::GitBranch => Self::GitBranch,
            DefaultPayloadArg::GitAuthor => Self::GitAuthor,
            DefaultPayloadArg::LastGitCommit => Self::LastGitCommit,
            DefaultPayloadArg::LastGitCommitHash => Self::LastGitCommitHash,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
