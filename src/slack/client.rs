//! [`HttpClient`] backed by reqwest.

use http::HeaderValue;
use http::header::USER_AGENT;

use super::{ApiRequest, ApiResponse, HttpClient, HttpError};

const AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Sends Web API calls through a default `reqwest::Client`.
///
/// Timeouts are reqwest's defaults. Each call is attempted once.
///
/// # Example
///
/// ```no_run
/// use post_to_slack::slack::{ApiRequest, ApiToken, HttpClient, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let token = ApiToken::new("xoxb-...");
/// let url = Url::parse("https://slack.com/api/auth.test")?;
/// let response = ReqwestClient::new()
///     .post(ApiRequest::json(url, token.bearer_header()?, b"{}".to_vec()))
///     .await?;
/// println!("Slack answered {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpClient for ReqwestClient {
    async fn post(&self, request: ApiRequest) -> Result<ApiResponse, HttpError> {
        let response = self
            .inner
            .post(request.url)
            .headers(request.headers)
            .header(USER_AGENT, HeaderValue::from_static(AGENT))
            .body(request.body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

fn transport_error(error: reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout
    } else if error.is_builder() {
        HttpError::InvalidUrl(error.to_string())
    } else {
        HttpError::Connection(Box::new(error))
    }
}
