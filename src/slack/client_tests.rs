//! Tests for `ReqwestClient`.
//!
//! Only transport failures are covered; a successful call needs a live
//! Slack workspace.

use super::{ApiRequest, ApiToken, HttpClient, HttpError, ReqwestClient};

fn call_to(url: &str) -> ApiRequest {
    ApiRequest::json(
        url::Url::parse(url).unwrap(),
        ApiToken::new("xoxb-test").bearer_header().unwrap(),
        b"{}".to_vec(),
    )
}

#[test]
fn client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestClient>();
}

#[tokio::test]
async fn unresolvable_host_is_a_transport_failure() {
    let client = ReqwestClient::new();

    let result = client
        .post(call_to("http://invalid.invalid.invalid/api/chat.postMessage"))
        .await;

    // A proxy in the environment may answer with an error status instead.
    match result {
        Err(HttpError::Connection(_)) => {}
        Ok(response) if response.rejection().is_some() => {}
        other => panic!("Expected connection error or proxy error response, got {other:?}"),
    }
}
