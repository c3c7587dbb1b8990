//! Browser service — the four fixed automation operations.

use nlpilot_domain::automation::AutomationRequest;
use nlpilot_domain::command::BrowserCommand;
use nlpilot_domain::error::NlPilotError;

use crate::ports::{AutomationClient, EventStream};

/// Application service exposing the fixed set of browser operations.
///
/// Each operation builds one [`AutomationRequest`] with a fresh correlation
/// id and returns the client's event stream **unmodified** — no filtering,
/// buffering, or reordering happens here.
pub struct BrowserService<C> {
    client: C,
}

impl<C: AutomationClient> BrowserService<C> {
    /// Create a new service backed by the given automation client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Open `url` in the browser.
    ///
    /// # Errors
    ///
    /// Returns [`NlPilotError::Upstream`] when the automation call fails at
    /// the transport layer.
    pub async fn navigate(&self, url: &str) -> Result<EventStream, NlPilotError> {
        tracing::info!(url, "navigating");
        self.send(AutomationRequest::for_command(&BrowserCommand::Navigate {
            url: url.to_string(),
        }))
        .await
    }

    /// Capture an accessibility snapshot of the current page.
    ///
    /// # Errors
    ///
    /// Returns [`NlPilotError::Upstream`] when the automation call fails at
    /// the transport layer.
    pub async fn take_snapshot(&self) -> Result<EventStream, NlPilotError> {
        tracing::info!("taking snapshot");
        self.send(AutomationRequest::for_command(&BrowserCommand::Snapshot))
            .await
    }

    /// Click the element identified by `element_ref`.
    ///
    /// # Errors
    ///
    /// Returns [`NlPilotError::Upstream`] when the automation call fails at
    /// the transport layer.
    pub async fn click_element(
        &self,
        element_ref: &str,
        element: &str,
    ) -> Result<EventStream, NlPilotError> {
        tracing::info!(element_ref, element, "clicking element");
        self.send(AutomationRequest::for_command(&BrowserCommand::Click {
            element_ref: element_ref.to_string(),
            element: element.to_string(),
        }))
        .await
    }

    /// Type `text` into the element identified by `element_ref`, optionally
    /// submitting afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`NlPilotError::Upstream`] when the automation call fails at
    /// the transport layer.
    pub async fn type_in_element(
        &self,
        element_ref: &str,
        element: Option<&str>,
        text: &str,
        submit: bool,
    ) -> Result<EventStream, NlPilotError> {
        tracing::info!(element_ref, element, text, submit, "typing in element");
        self.send(AutomationRequest::for_command(&BrowserCommand::Type {
            element_ref: element_ref.to_string(),
            element: element.map(str::to_string),
            text: text.to_string(),
            submit,
        }))
        .await
    }

    async fn send(&self, request: AutomationRequest) -> Result<EventStream, NlPilotError> {
        tracing::debug!(id = %request.id, command = %request.command, "sending automation request");
        self.client.send_command(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    use nlpilot_domain::automation::{AutomationEvent, CLICK_COMMAND, NAVIGATE_COMMAND};
    use serde_json::json;
    use tokio_stream::StreamExt;

    /// Records every submitted request and replies with a single `ack`.
    #[derive(Default)]
    struct RecordingClient {
        requests: Mutex<Vec<AutomationRequest>>,
    }

    impl AutomationClient for &RecordingClient {
        fn send_command(
            &self,
            request: AutomationRequest,
        ) -> impl Future<Output = Result<EventStream, NlPilotError>> + Send {
            let event = AutomationEvent {
                id: Some(request.id.to_string()),
                event_type: "ack".to_string(),
                data: None,
                error: None,
            };
            self.requests.lock().unwrap().push(request);
            async move {
                Ok(Box::pin(tokio_stream::once(Ok(event))) as EventStream)
            }
        }
    }

    #[tokio::test]
    async fn should_submit_navigate_request_and_forward_stream() {
        let client = RecordingClient::default();
        let service = BrowserService::new(&client);

        let mut stream = service.navigate("http://example.com").await.unwrap();
        let event = stream.next().await.unwrap().unwrap();
        assert_eq!(event.event_type, "ack");
        assert!(stream.next().await.is_none());

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].command, NAVIGATE_COMMAND);
        assert_eq!(
            requests[0].params.as_ref().unwrap().get("url"),
            Some(&json!("http://example.com"))
        );
    }

    #[tokio::test]
    async fn should_correlate_ack_with_request_id() {
        let client = RecordingClient::default();
        let service = BrowserService::new(&client);

        let mut stream = service.take_snapshot().await.unwrap();
        let event = stream.next().await.unwrap().unwrap();

        let requests = client.requests.lock().unwrap();
        assert_eq!(event.id.as_deref(), Some(requests[0].id.to_string().as_str()));
    }

    #[tokio::test]
    async fn should_submit_click_request_with_description() {
        let client = RecordingClient::default();
        let service = BrowserService::new(&client);

        service.click_element("el-1", "Login button").await.unwrap();

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].command, CLICK_COMMAND);
        let params = requests[0].params.as_ref().unwrap();
        assert_eq!(params.get("ref"), Some(&json!("el-1")));
        assert_eq!(params.get("element"), Some(&json!("Login button")));
    }

    #[tokio::test]
    async fn should_submit_type_request_with_submit_flag() {
        let client = RecordingClient::default();
        let service = BrowserService::new(&client);

        service
            .type_in_element("el-2", Some("Search box"), "hello", true)
            .await
            .unwrap();

        let requests = client.requests.lock().unwrap();
        let params = requests[0].params.as_ref().unwrap();
        assert_eq!(params.get("text"), Some(&json!("hello")));
        assert_eq!(params.get("submit"), Some(&json!(true)));
    }
}
