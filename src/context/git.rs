//! Reading git facts through the `git` command line.

use std::path::PathBuf;
use std::process::Command;

use super::BuildContext;

/// Runs an external program and returns its trimmed standard output.
///
/// Returns `None` when the program cannot be started, exits with a
/// non-zero status, or prints nothing.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args`.
    fn run(&self, program: &str, args: &[&str]) -> Option<String>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    current_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Creates a runner that executes commands in `current_dir`, or in the
    /// process working directory when `None`.
    #[must_use]
    pub const fn new(current_dir: Option<PathBuf>) -> Self {
        Self { current_dir }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let output = match command.output() {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Failed to run {program}: {e}");
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                "{program} {} exited with {}",
                args.join(" "),
                output.status
            );
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!stdout.is_empty()).then_some(stdout)
    }
}

/// Reads branch and last-commit facts from a git checkout.
///
/// # Example
///
/// ```no_run
/// use post_to_slack::context::GitCli;
///
/// let context = GitCli::new(None).collect(Some("beta".to_string()));
/// println!("{:?}", context.git_branch);
/// ```
#[derive(Debug, Clone)]
pub struct GitCli<R = ProcessRunner> {
    runner: R,
}

impl GitCli<ProcessRunner> {
    /// Creates a reader for the repository at `repository`, or the current
    /// directory when `None`.
    #[must_use]
    pub const fn new(repository: Option<PathBuf>) -> Self {
        Self {
            runner: ProcessRunner::new(repository),
        }
    }
}

impl<R: CommandRunner> GitCli<R> {
    /// Creates a reader using a custom command runner.
    #[must_use]
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    fn git(&self, args: &[&str]) -> Option<String> {
        self.runner.run("git", args)
    }

    /// Current branch name. A detached `HEAD` counts as unknown.
    #[must_use]
    pub fn branch(&self) -> Option<String> {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
            .filter(|branch| branch != "HEAD")
    }

    /// Author email of the last commit.
    #[must_use]
    pub fn author_email(&self) -> Option<String> {
        self.git(&["log", "-1", "--pretty=format:%ae"])
    }

    /// Full message of the last commit.
    #[must_use]
    pub fn last_commit_message(&self) -> Option<String> {
        self.git(&["log", "-1", "--pretty=format:%B"])
    }

    /// Abbreviated hash of the last commit.
    #[must_use]
    pub fn last_commit_hash(&self) -> Option<String> {
        self.git(&["log", "-1", "--pretty=format:%h"])
    }

    /// Collects every fact into a [`BuildContext`].
    #[must_use]
    pub fn collect(&self, lane_name: Option<String>) -> BuildContext {
        BuildContext {
            lane_name,
            git_branch: self.branch(),
            git_author_email: self.author_email(),
            last_git_commit_message: self.last_commit_message(),
            last_git_commit_hash: self.last_commit_hash(),
        }
    }
}
