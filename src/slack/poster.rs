//! Delivery of formatted messages to `chat.postMessage`.

use http::StatusCode;
use serde::Serialize;

use crate::message::FormattedMessage;

use super::{ApiRequest, ApiResponse, ApiToken, DeliveryError, HttpClient};
use super::{Reporter, TracingReporter};

/// The Slack Web API endpoint messages are posted to.
pub const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Message reported after a request completes.
pub const SUCCESS_MESSAGE: &str = "Successfully sent Slack notification";

/// Result of a single delivery attempt.
///
/// Informational only: a failed delivery is reported, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The request completed. The status is whatever Slack answered,
    /// including non-2xx codes.
    Sent {
        /// HTTP status of the response
        status: StatusCode,
    },
    /// The request could not be completed.
    Failed {
        /// Description of the failure
        reason: String,
    },
}

/// JSON body of a `chat.postMessage` request.
#[derive(Debug, Serialize)]
struct PostMessageBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a str>,
    attachments: [&'a serde_json::Value; 1],
}

/// Serializes a formatted message into the `chat.postMessage` body.
///
/// The `channel` key is omitted when no channel is set, so Slack falls
/// back to the token's default.
///
/// # Errors
///
/// Returns [`DeliveryError::Encode`] if serialization fails.
pub fn encode_body(message: &FormattedMessage) -> Result<Vec<u8>, DeliveryError> {
    let body = PostMessageBody {
        channel: message.channel.as_deref(),
        attachments: [&message.attachment],
    };
    Ok(serde_json::to_vec(&body)?)
}

/// Posts formatted messages to Slack with a single attempt.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `R`: Where outcomes are reported (defaults to [`TracingReporter`])
///
/// # Example
///
/// ```
/// use post_to_slack::slack::{ReqwestClient, SlackPoster};
///
/// let poster = SlackPoster::new(ReqwestClient::new());
/// assert_eq!(poster.endpoint().as_str(), "https://slack.com/api/chat.postMessage");
/// ```
#[derive(Debug)]
pub struct SlackPoster<H, R = TracingReporter> {
    client: H,
    reporter: R,
    endpoint: url::Url,
}

impl<H> SlackPoster<H, TracingReporter> {
    /// Creates a poster targeting [`POST_MESSAGE_URL`] that reports via `tracing`.
    #[must_use]
    pub fn new(client: H) -> Self {
        Self {
            client,
            reporter: TracingReporter,
            endpoint: url::Url::parse(POST_MESSAGE_URL).expect("POST_MESSAGE_URL is a valid URL"),
        }
    }
}

impl<H, R> SlackPoster<H, R> {
    /// Sets a custom reporter.
    #[must_use]
    pub fn with_reporter<R2>(self, reporter: R2) -> SlackPoster<H, R2> {
        SlackPoster {
            client: self.client,
            reporter,
            endpoint: self.endpoint,
        }
    }

    /// Overrides the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: url::Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Returns the reporter.
    #[must_use]
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }
}

impl<H: HttpClient, R: Reporter> SlackPoster<H, R> {
    /// Posts the message and reports the outcome.
    ///
    /// Any failure is reported through the reporter and swallowed. A
    /// completed request is reported as a success whatever the HTTP status
    /// or Slack's `ok` flag; those only produce a warning in the log.
    pub async fn post(&self, token: &ApiToken, message: &FormattedMessage) -> DeliveryOutcome {
        match self.try_post(token, message).await {
            Ok(response) => {
                warn_on_rejection(&response);
                self.reporter.success(SUCCESS_MESSAGE);
                DeliveryOutcome::Sent {
                    status: response.status,
                }
            }
            Err(e) => {
                let reason = e.to_string();
                self.reporter.error(&format!("Exception: {reason}"));
                DeliveryOutcome::Failed { reason }
            }
        }
    }

    /// Builds the request for the given message.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be used as a header value or
    /// the body cannot be encoded.
    pub fn build_request(
        &self,
        token: &ApiToken,
        message: &FormattedMessage,
    ) -> Result<ApiRequest, DeliveryError> {
        let authorization = token
            .bearer_header()
            .map_err(|_| DeliveryError::InvalidToken)?;

        Ok(ApiRequest::json(
            self.endpoint.clone(),
            authorization,
            encode_body(message)?,
        ))
    }

    async fn try_post(
        &self,
        token: &ApiToken,
        message: &FormattedMessage,
    ) -> Result<ApiResponse, DeliveryError> {
        let request = self.build_request(token, message)?;
        tracing::debug!("Posting message to {}", self.endpoint);
        Ok(self.client.post(request).await?)
    }
}

/// Logs a warning when Slack rejected the message.
///
/// Rejections are not treated as failures: the outcome is still reported
/// as sent.
fn warn_on_rejection(response: &ApiResponse) {
    if let Some(reason) = response.rejection() {
        tracing::warn!(
            "Slack did not accept the message ({reason}); it may not have been delivered"
        );
    }
}
