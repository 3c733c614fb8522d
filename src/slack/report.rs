//! Outcome reporting for the delivery client.

/// Receives the human-readable outcome of a delivery attempt.
///
/// Exactly one of the two methods is called per [`post`](super::SlackPoster::post).
pub trait Reporter: Send + Sync {
    /// Reports a successful delivery.
    fn success(&self, message: &str);

    /// Reports a failed delivery.
    fn error(&self, message: &str);
}

/// Reporter that forwards to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn success(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
