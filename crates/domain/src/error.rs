//! Common error types used across the workspace.
//!
//! Two distinct error paths exist and must not be unified:
//! - Translation-service failures are **data**: the gateway turns them into
//!   an error-shaped [`CommandEnvelope`](crate::command::CommandEnvelope),
//!   which the dispatcher degrades to a single in-stream error event.
//! - Validation failures, unknown actions, and automation-service failures
//!   are **fatal**: they surface as [`NlPilotError`] and terminate the
//!   stream, to be caught only at the ingress boundary.

/// Top-level error for the nlpilot workspace.
///
/// Each layer defines its own typed errors and converts via `#[from]` or
/// boxing into [`NlPilotError::Upstream`].
#[derive(Debug, thiserror::Error)]
pub enum NlPilotError {
    /// A request or envelope failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The translation service produced an action outside the fixed set.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// An external service call failed at the transport or protocol layer.
    #[error("{0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Field-level validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The incoming query was empty or whitespace-only.
    #[error("query cannot be empty")]
    EmptyQuery,

    /// The action requires a non-blank `target` field.
    #[error("{action} action requires a non-empty target")]
    MissingTarget {
        /// The action that was missing its target.
        action: &'static str,
    },

    /// The `type` action requires a `params` object.
    #[error("type action requires params")]
    MissingParams,

    /// The `type` action requires `params.text`.
    #[error("type action requires params.text")]
    MissingText,
}
