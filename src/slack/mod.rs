//! Slack delivery layer.
//!
//! This module provides:
//! - Web API request/response types and the client seam ([`ApiRequest`],
//!   [`ApiResponse`], [`HttpClient`])
//! - Production HTTP client ([`ReqwestClient`])
//! - The bot token newtype ([`ApiToken`])
//! - Outcome reporting ([`Reporter`], [`TracingReporter`])
//! - Single-attempt delivery to `chat.postMessage` ([`SlackPoster`])

mod client;
mod error;
mod http;
mod poster;
mod report;
mod token;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::{DeliveryError, HttpError};
pub use http::{ApiRequest, ApiResponse, HttpClient};
pub use poster::{DeliveryOutcome, POST_MESSAGE_URL, SUCCESS_MESSAGE, SlackPoster, encode_body};
pub use report::{Reporter, TracingReporter};
pub use token::ApiToken;
