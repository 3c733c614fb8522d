//! Tests for the Web API request/response types.

use super::{ApiRequest, ApiResponse, ApiToken, HttpError};

fn post_message_url() -> url::Url {
    url::Url::parse("https://slack.com/api/chat.postMessage").unwrap()
}

mod api_request {
    use super::*;

    #[test]
    fn json_sets_content_type_and_authorization() {
        let authorization = ApiToken::new("xoxb-1").bearer_header().unwrap();

        let request = ApiRequest::json(post_message_url(), authorization, b"{}".to_vec());

        assert_eq!(request.url, post_message_url());
        assert_eq!(request.body, b"{}");
        assert_eq!(request.headers.len(), 2);
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            request.headers.get(http::header::AUTHORIZATION).unwrap(),
            "Bearer xoxb-1"
        );
    }

    #[test]
    fn debug_hides_the_token() {
        let authorization = ApiToken::new("xoxb-secret").bearer_header().unwrap();

        let request = ApiRequest::json(post_message_url(), authorization, Vec::new());
        let debug = format!("{request:?}");

        assert!(debug.contains("ApiRequest"));
        assert!(!debug.contains("xoxb-secret"));
    }
}

mod api_response {
    use super::*;

    fn answer(status: http::StatusCode, body: &str) -> ApiResponse {
        ApiResponse::new(status, body.as_bytes().to_vec())
    }

    #[test]
    fn ok_envelope_is_accepted() {
        let response = answer(http::StatusCode::OK, r#"{"ok":true,"ts":"1700000000.000100"}"#);

        assert_eq!(response.rejection(), None);
    }

    #[test]
    fn error_envelope_reports_slack_error_code() {
        let response = answer(
            http::StatusCode::OK,
            r#"{"ok":false,"error":"channel_not_found"}"#,
        );

        assert_eq!(response.rejection().as_deref(), Some("channel_not_found"));
    }

    #[test]
    fn error_envelope_without_code_is_still_rejected() {
        let response = answer(http::StatusCode::OK, r#"{"ok":false}"#);

        assert_eq!(response.rejection().as_deref(), Some("unknown error"));
    }

    #[test]
    fn error_status_is_rejected_regardless_of_body() {
        let response = answer(http::StatusCode::TOO_MANY_REQUESTS, r#"{"ok":true}"#);

        assert_eq!(
            response.rejection().as_deref(),
            Some("HTTP 429 Too Many Requests")
        );
    }

    #[test]
    fn success_status_with_unrecognized_body_is_accepted() {
        assert_eq!(answer(http::StatusCode::OK, "ok").rejection(), None);
        assert_eq!(answer(http::StatusCode::OK, "").rejection(), None);
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let source = std::io::Error::other("connection refused");
        let error = HttpError::Connection(Box::new(source));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("connection refused")
        );
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn invalid_url_displays_reason() {
        let error = HttpError::InvalidUrl("missing scheme".to_string());

        assert!(error.to_string().contains("missing scheme"));
    }
}
