//! Browser automation adapter error types.

use nlpilot_domain::error::NlPilotError;

/// Errors specific to the browser-automation gateway.
#[derive(Debug, thiserror::Error)]
pub enum BrowserSseError {
    /// Failed to build the underlying HTTP client.
    #[error("failed to build the automation HTTP client")]
    Build(#[source] reqwest::Error),

    /// The request never reached the service or the connection broke.
    #[error("error reaching automation service: {0}")]
    Http(#[source] reqwest::Error),

    /// The service refused the command before streaming anything.
    #[error("automation service returned status {status}: {body}")]
    Status {
        /// HTTP status code of the reply.
        status: u16,
        /// Reply body, for the diagnostic.
        body: String,
    },

    /// The SSE stream broke mid-reply.
    #[error("automation stream failed: {0}")]
    Stream(#[source] eventsource_stream::EventStreamError<reqwest::Error>),

    /// An SSE frame did not decode into an automation event.
    #[error("failed to decode automation event: {0}")]
    Decode(#[source] serde_json::Error),
}

impl BrowserSseError {
    /// Convert into an [`NlPilotError::Upstream`] for propagation across
    /// the port boundary.
    #[must_use]
    pub fn into_domain(self) -> NlPilotError {
        NlPilotError::Upstream(Box::new(self))
    }
}

impl From<BrowserSseError> for NlPilotError {
    fn from(err: BrowserSseError) -> Self {
        err.into_domain()
    }
}
