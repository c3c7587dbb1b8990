//! Translation port — natural-language query to command envelope.

use std::future::Future;

use nlpilot_domain::command::CommandEnvelope;
use nlpilot_domain::error::NlPilotError;

/// One-shot call to the external translation service.
///
/// Implementations must tolerate upstream failure themselves: a transport
/// error, a malformed reply, or an empty body is returned as an **error-shaped
/// envelope** (`action == "error"`, diagnostic in `params.errorMessage`),
/// never as an `Err`. An `Err` from this port therefore means the gateway
/// itself is broken and is treated as fatal by the dispatcher.
pub trait TranslationClient: Send + Sync {
    /// Translate a non-empty query into a [`CommandEnvelope`].
    fn translate(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<CommandEnvelope, NlPilotError>> + Send;
}

impl<T: TranslationClient> TranslationClient for std::sync::Arc<T> {
    fn translate(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<CommandEnvelope, NlPilotError>> + Send {
        (**self).translate(query)
    }
}
