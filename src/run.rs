//! Application execution logic.
//!
//! Gathers build facts, formats the message and delivers it once.

use thiserror::Error;

use post_to_slack::config::ValidatedConfig;
use post_to_slack::context::{BuildContext, GitCli};
use post_to_slack::message::{FormattedMessage, format_message};
use post_to_slack::slack::{
    DeliveryError, DeliveryOutcome, HttpClient, POST_MESSAGE_URL, ReqwestClient, Reporter,
    SlackPoster, encode_body,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
///
/// Delivery failures are not errors; they are reported and swallowed.
#[derive(Debug, Error)]
pub enum RunError {
    /// The dry-run body could not be rendered.
    #[error("Failed to render request body: {0}")]
    DryRun(#[source] DeliveryError),
}

/// Executes one notification.
///
/// This function:
/// 1. Reads git facts from the configured repository
/// 2. Formats the message
/// 3. Posts it to Slack, or logs the body in dry-run mode
///
/// # Errors
///
/// Returns an error only if the dry-run body cannot be rendered.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let context = GitCli::new(config.repository.clone()).collect(config.lane.clone());
    let poster = SlackPoster::new(ReqwestClient::new());

    execute_with(&config, &context, &poster).await?;
    Ok(())
}

/// Formats and delivers with an explicit context and poster.
///
/// Returns `None` in dry-run mode, where nothing is sent.
async fn execute_with<H: HttpClient, R: Reporter>(
    config: &ValidatedConfig,
    context: &BuildContext,
    poster: &SlackPoster<H, R>,
) -> Result<Option<DeliveryOutcome>, RunError> {
    tracing::debug!("Build context: {context:?}");

    let message = format_message(&config.request, context);

    if config.dry_run {
        let body = render_body(&message).map_err(RunError::DryRun)?;
        tracing::info!("Dry-run: would POST to {POST_MESSAGE_URL}:\n{body}");
        return Ok(None);
    }

    let outcome = poster.post(&config.request.api_token, &message).await;
    tracing::debug!("Delivery outcome: {outcome:?}");
    Ok(Some(outcome))
}

/// Renders the request body as pretty-printed JSON.
fn render_body(message: &FormattedMessage) -> Result<String, DeliveryError> {
    let body: serde_json::Value = serde_json::from_slice(&encode_body(message)?)?;
    Ok(serde_json::to_string_pretty(&body)?)
}
