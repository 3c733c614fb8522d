//! The transport seam between [`SlackPoster`](super::SlackPoster) and the network.
//!
//! Every Web API call made here is a JSON POST carrying a bearer token, so
//! the request and response types only model that shape.

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, StatusCode};
use serde::Deserialize;
use url::Url;

use super::HttpError;

/// A JSON POST to one Slack Web API method.
///
/// `Debug` output is safe to log: the authorization value is marked
/// sensitive and `http` prints it as `Sensitive`.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Web API method URL
    pub url: Url,
    /// `Content-Type` and `Authorization`
    pub headers: HeaderMap,
    /// Encoded JSON body
    pub body: Vec<u8>,
}

impl ApiRequest {
    /// Creates a JSON POST authorized with `authorization`.
    #[must_use]
    pub fn json(url: Url, authorization: HeaderValue, body: Vec<u8>) -> Self {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        Self { url, headers, body }
    }
}

/// Slack's answer, with the body fully buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw response body
    pub body: Vec<u8>,
}

/// The part of the Web API envelope that says whether a call was accepted.
#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Describes why Slack did not accept the call, or `None` if it did.
    ///
    /// A non-2xx status is a rejection whatever the body says. A 2xx body
    /// that is not a Web API envelope counts as accepted.
    #[must_use]
    pub fn rejection(&self) -> Option<String> {
        if !self.status.is_success() {
            return Some(format!("HTTP {}", self.status));
        }

        match serde_json::from_slice::<Envelope>(&self.body) {
            Ok(Envelope { ok: false, error }) => {
                Some(error.unwrap_or_else(|| "unknown error".to_string()))
            }
            _ => None,
        }
    }
}

/// Sends Web API calls.
///
/// [`ReqwestClient`](super::ReqwestClient) is the production implementation;
/// tests substitute clients that record requests and script answers.
pub trait HttpClient: Send + Sync {
    /// Sends one request and buffers the answer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response could be obtained: the
    /// connection failed, the request timed out or the URL was unusable.
    fn post(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, HttpError>> + Send;
}
