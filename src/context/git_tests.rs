//! Tests for `GitCli`.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{BuildContext, CommandRunner, GitCli, ProcessRunner};

/// Runner answering from a fixed table keyed by the joined arguments.
#[derive(Debug, Default)]
struct ScriptedRunner {
    answers: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    fn answer(mut self, args: &str, output: &str) -> Self {
        self.answers.insert(args.to_string(), output.to_string());
        self
    }
}

impl CommandRunner for &ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        let joined = args.join(" ");
        self.calls.lock().unwrap().push(format!("{program} {joined}"));
        self.answers.get(&joined).cloned()
    }
}

fn full_repository() -> ScriptedRunner {
    ScriptedRunner::default()
        .answer("rev-parse --abbrev-ref HEAD", "release/2.4")
        .answer("log -1 --pretty=format:%ae", "dev@example.com")
        .answer("log -1 --pretty=format:%B", "Bump version to 2.4.0")
        .answer("log -1 --pretty=format:%h", "a1b2c3d")
}

#[test]
fn collect_reads_every_fact() {
    let runner = full_repository();
    let git = GitCli::with_runner(&runner);

    let context = git.collect(Some("beta".to_string()));

    assert_eq!(
        context,
        BuildContext {
            lane_name: Some("beta".to_string()),
            git_branch: Some("release/2.4".to_string()),
            git_author_email: Some("dev@example.com".to_string()),
            last_git_commit_message: Some("Bump version to 2.4.0".to_string()),
            last_git_commit_hash: Some("a1b2c3d".to_string()),
        }
    );
}

#[test]
fn commands_are_run_through_git() {
    let runner = full_repository();
    let git = GitCli::with_runner(&runner);

    let _ = git.branch();

    let calls = runner.calls.lock().unwrap().clone();
    assert_eq!(calls, vec!["git rev-parse --abbrev-ref HEAD"]);
}

#[test]
fn detached_head_has_no_branch() {
    let runner = ScriptedRunner::default().answer("rev-parse --abbrev-ref HEAD", "HEAD");
    let git = GitCli::with_runner(&runner);

    assert_eq!(git.branch(), None);
}

#[test]
fn failing_commands_leave_facts_empty() {
    let runner = ScriptedRunner::default();
    let git = GitCli::with_runner(&runner);

    let context = git.collect(None);

    assert_eq!(context, BuildContext::default());
}

#[test]
fn process_runner_outside_a_repository_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let git = GitCli::with_runner(ProcessRunner::new(Some(dir.path().to_path_buf())));

    // Holds whether or not git is installed.
    assert_eq!(git.last_commit_hash(), None);
}

#[test]
fn process_runner_reports_missing_program_as_none() {
    let runner = ProcessRunner::default();

    assert_eq!(runner.run("definitely-not-a-real-program-4821", &[]), None);
}
