//! NLWeb adapter error types.
//!
//! These never cross the port boundary as `Err` — the client folds them into
//! the diagnostic text of an error-shaped envelope. They exist so failures
//! are typed and uniformly worded before that conversion.

/// Errors specific to the NLWeb gateway.
#[derive(Debug, thiserror::Error)]
pub enum NlWebError {
    /// Failed to build the underlying HTTP client.
    #[error("failed to build the NLWeb HTTP client")]
    Build(#[source] reqwest::Error),

    /// The request never reached the service or the connection broke.
    #[error("error communicating with NLWeb service: {0}")]
    Http(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("NLWeb service returned status {status}")]
    Status {
        /// HTTP status code of the reply.
        status: u16,
    },

    /// The reply body could not be decoded.
    #[error("failed to decode NLWeb reply: {0}")]
    Decode(#[source] reqwest::Error),

    /// The reply decoded but carried no command envelope.
    #[error("no command received from NLWeb service")]
    EmptyReply,
}
