//! Orchestration service — translate a query, dispatch the command.

use nlpilot_domain::automation::AutomationEvent;
use nlpilot_domain::command::BrowserCommand;
use nlpilot_domain::error::{NlPilotError, ValidationError};

use crate::ports::{AutomationClient, EventStream, TranslationClient};
use crate::services::browser_service::BrowserService;

/// Application service driving the whole flow: one translation call followed
/// by at most one automation call.
///
/// Error policy:
/// - An **error-shaped envelope** from the translation gateway degrades to a
///   single in-stream `error` event followed by normal completion — the
///   automation service is never invoked and the connection stays healthy.
/// - Validation failures, unknown actions, and automation failures are
///   **fatal**: the returned `Result`/stream carries an `Err` that only the
///   ingress boundary converts into a terminal event.
pub struct OrchestrationService<T, C> {
    translator: T,
    browser: BrowserService<C>,
}

impl<T, C> OrchestrationService<T, C>
where
    T: TranslationClient,
    C: AutomationClient,
{
    /// Create a new service from a translation client and a browser service.
    pub fn new(translator: T, browser: BrowserService<C>) -> Self {
        Self {
            translator,
            browser,
        }
    }

    /// Process a natural-language query into a stream of automation events.
    ///
    /// # Errors
    ///
    /// Returns [`NlPilotError::Validation`] for a blank query or missing
    /// per-action fields, [`NlPilotError::UnknownAction`] for an action
    /// outside the fixed set, and [`NlPilotError::Upstream`] when a gateway
    /// call fails fatally.
    pub async fn process_query(&self, query: &str) -> Result<EventStream, NlPilotError> {
        if query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery.into());
        }

        tracing::info!(query, "processing natural language query");
        let envelope = self.translator.translate(query).await?;

        if envelope.is_error() {
            let message = envelope.error_message();
            tracing::warn!(message, "translation service returned an error command");
            let event = AutomationEvent::error(message);
            return Ok(Box::pin(tokio_stream::once(Ok(event))));
        }

        tracing::info!(
            action = %envelope.action,
            target = envelope.target.as_deref().unwrap_or_default(),
            "dispatching translated command"
        );

        match envelope.interpret()? {
            BrowserCommand::Navigate { url } => self.browser.navigate(&url).await,
            BrowserCommand::Snapshot => self.browser.take_snapshot().await,
            BrowserCommand::Click {
                element_ref,
                element,
            } => self.browser.click_element(&element_ref, &element).await,
            BrowserCommand::Type {
                element_ref,
                element,
                text,
                submit,
            } => {
                self.browser
                    .type_in_element(&element_ref, element.as_deref(), &text, submit)
                    .await
            }
        }
    }
}
