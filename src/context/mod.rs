//! Build-environment facts.
//!
//! The formatter never reads the environment itself; the caller gathers a
//! [`BuildContext`] up front (usually via [`GitCli`]) and passes it in.

mod git;

#[cfg(test)]
mod git_tests;

pub use git::{CommandRunner, GitCli, ProcessRunner};

/// Read-only snapshot of the facts behind the built-in attachment fields.
///
/// Any fact may be missing; the formatter renders missing facts as empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    /// Name of the lane (pipeline step) posting the message
    pub lane_name: Option<String>,
    /// Current git branch
    pub git_branch: Option<String>,
    /// Author email of the last commit
    pub git_author_email: Option<String>,
    /// Full message of the last commit
    pub last_git_commit_message: Option<String>,
    /// Abbreviated hash of the last commit
    pub last_git_commit_hash: Option<String>,
}
