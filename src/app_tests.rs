//! Tests for the binary glue.

use std::path::PathBuf;

use post_to_slack::config::{ConfigError, field};

use super::*;

#[test]
fn missing_token_hint_points_to_slack_apps() {
    let error = ConfigError::missing(field::API_TOKEN, "Use --api-token");

    let hint = config_hint(&error).unwrap();

    assert!(hint.contains("https://api.slack.com/apps"));
    assert!(hint.contains("chat:write"));
}

#[test]
fn unreadable_config_file_hint_suggests_init() {
    let error = ConfigError::FileRead {
        path: PathBuf::from("post-to-slack.toml"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };

    assert!(config_hint(&error).unwrap().contains("post-to-slack init"));
}

#[test]
fn other_errors_have_no_hint() {
    assert_eq!(config_hint(&ConfigError::InvalidToken), None);
    assert_eq!(
        config_hint(&ConfigError::InvalidPayload {
            value: "oops".to_string()
        }),
        None
    );
}

#[test]
fn exit_statuses_are_distinct() {
    let codes =
        [Exit::Done, Exit::Config, Exit::Runtime].map(|exit| format!("{:?}", ExitCode::from(exit)));

    assert_ne!(codes[0], codes[1]);
    assert_ne!(codes[1], codes[2]);
    assert_ne!(codes[0], codes[2]);
}
