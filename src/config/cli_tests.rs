//! Tests for CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use super::cli::{Cli, Command, DefaultPayloadArg};
use crate::message::DefaultPayload;

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::parse_from([
            "post-to-slack",
            "--api-token",
            "xoxb-1",
            "--message",
            "App successfully released!",
        ]);

        assert_eq!(cli.api_token.as_deref(), Some("xoxb-1"));
        assert_eq!(cli.message.as_deref(), Some("App successfully released!"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_message_options() {
        let cli = Cli::parse_from([
            "post-to-slack",
            "--channel",
            "releases",
            "--pretext",
            "Heads up",
            "--payload",
            "Build Date=2024-01-01",
            "--payload",
            "Built by=Jenkins",
            "--attachment-properties",
            r#"{"thumb_url":"http://example.com/t.png"}"#,
        ]);

        assert_eq!(cli.channel.as_deref(), Some("releases"));
        assert_eq!(cli.pretext.as_deref(), Some("Heads up"));
        assert_eq!(cli.payload, vec!["Build Date=2024-01-01", "Built by=Jenkins"]);
        assert_eq!(
            cli.attachment_properties.as_deref(),
            Some(r#"{"thumb_url":"http://example.com/t.png"}"#)
        );
    }

    #[test]
    fn parse_default_payloads_list() {
        let cli = Cli::parse_from([
            "post-to-slack",
            "--default-payloads",
            "git_branch,git_author",
        ]);

        assert_eq!(
            cli.default_payloads,
            Some(vec![DefaultPayloadArg::GitBranch, DefaultPayloadArg::GitAuthor])
        );
    }

    #[test]
    fn default_payloads_conflict_with_none_flag() {
        let result = Cli::try_parse_from([
            "post-to-slack",
            "--default-payloads",
            "lane",
            "--no-default-payloads",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn unknown_default_payload_is_rejected() {
        let result = Cli::try_parse_from(["post-to-slack", "--default-payloads", "git_tag"]);

        assert!(result.is_err());
    }

    #[test]
    fn success_takes_explicit_value() {
        let failed = Cli::parse_from(["post-to-slack", "--success", "false"]);
        let passed = Cli::parse_from(["post-to-slack", "--success", "true"]);
        let unset = Cli::parse_from(["post-to-slack"]);

        assert_eq!(failed.success, Some(false));
        assert_eq!(passed.success, Some(true));
        assert_eq!(unset.success, None);
    }

    #[test]
    fn parse_runtime_flags() {
        let cli = Cli::parse_from([
            "post-to-slack",
            "--lane",
            "beta",
            "--repository",
            "/src/app",
            "-c",
            "slack.toml",
            "--hide-author-on-success",
            "--dry-run",
            "-v",
        ]);

        assert_eq!(cli.lane.as_deref(), Some("beta"));
        assert_eq!(cli.repository, Some(PathBuf::from("/src/app")));
        assert_eq!(cli.config, Some(PathBuf::from("slack.toml")));
        assert!(cli.hide_author_on_success);
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from(["post-to-slack", "init"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("post-to-slack.toml"));
            }
            None => panic!("expected init command"),
        }
    }

    #[test]
    fn init_accepts_custom_output() {
        let cli = Cli::parse_from(["post-to-slack", "init", "-o", "ci/slack.toml"]);

        match cli.command {
            Some(Command::Init { output }) => assert_eq!(output, PathBuf::from("ci/slack.toml")),
            None => panic!("expected init command"),
        }
    }
}

mod conversion {
    use super::*;

    #[test]
    fn payload_args_map_to_payloads() {
        let pairs = [
            (DefaultPayloadArg::Lane, DefaultPayload::Lane),
            (DefaultPayloadArg::TestResult, DefaultPayload::TestResult),
            (DefaultPayloadArg::GitBranch, DefaultPayload::GitBranch),
            (DefaultPayloadArg::GitAuthor, DefaultPayload::GitAuthor),
            (DefaultPayloadArg::LastGitCommit, DefaultPayload::LastGitCommit),
            (
                DefaultPayloadArg::LastGitCommitHash,
                DefaultPayload::LastGitCommitHash,
            ),
        ];

        for (arg, payload) in pairs {
            assert_eq!(DefaultPayload::from(arg), payload);
        }
    }
}
