//! Automation port — submit a request, receive its response stream.

use std::future::Future;
use std::pin::Pin;

use futures::Stream;

use nlpilot_domain::automation::{AutomationEvent, AutomationRequest};
use nlpilot_domain::error::NlPilotError;

/// A lazy, finite, non-restartable sequence of automation events.
///
/// The stream ends when the external service completes the reply; a
/// transport failure mid-stream yields one `Err` item and then terminates.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<AutomationEvent, NlPilotError>> + Send>>;

/// Single outbound call to the automation service whose response channel is
/// the event stream itself — there is no separate stream-address
/// negotiation step.
pub trait AutomationClient: Send + Sync {
    /// Submit a request and return the stream of events it produces.
    ///
    /// Transport-level failures of the initial call are returned as `Err`.
    fn send_command(
        &self,
        request: AutomationRequest,
    ) -> impl Future<Output = Result<EventStream, NlPilotError>> + Send;
}

impl<T: AutomationClient> AutomationClient for std::sync::Arc<T> {
    fn send_command(
        &self,
        request: AutomationRequest,
    ) -> impl Future<Output = Result<EventStream, NlPilotError>> + Send {
        (**self).send_command(request)
    }
}
