//! SSE implementation of the automation port.

use std::time::Duration;

use async_stream::stream;
use eventsource_stream::Eventsource;
use futures::StreamExt;

use nlpilot_app::ports::{AutomationClient, EventStream};
use nlpilot_domain::automation::{AutomationEvent, AutomationRequest};
use nlpilot_domain::error::NlPilotError;

use crate::config::BrowserConfig;
use crate::error::BrowserSseError;

/// Automation gateway backed by a reqwest client consuming SSE replies.
pub struct SseAutomationClient {
    client: reqwest::Client,
    url: String,
}

impl SseAutomationClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserSseError::Build`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &BrowserConfig) -> Result<Self, BrowserSseError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(BrowserSseError::Build)?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Build a client around an existing reqwest client, for sharing a
    /// connection pool with other gateways.
    #[must_use]
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl AutomationClient for SseAutomationClient {
    async fn send_command(&self, request: AutomationRequest) -> Result<EventStream, NlPilotError> {
        tracing::debug!(
            id = %request.id,
            command = %request.command,
            url = %self.url,
            "sending command to automation service"
        );

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|err| BrowserSseError::Http(err).into_domain())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BrowserSseError::Status {
                status: status.as_u16(),
                body,
            }
            .into_domain());
        }

        let request_id = request.id;
        let mut frames = response.bytes_stream().eventsource();

        let events = stream! {
            while let Some(frame) = frames.next().await {
                match frame {
                    Ok(frame) => match serde_json::from_str::<AutomationEvent>(&frame.data) {
                        Ok(event) => {
                            tracing::debug!(
                                id = event.id.as_deref().unwrap_or_default(),
                                event_type = %event.event_type,
                                "received automation event"
                            );
                            yield Ok(event);
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "undecodable automation event");
                            yield Err(BrowserSseError::Decode(err).into_domain());
                            return;
                        }
                    },
                    Err(err) => {
                        tracing::error!(error = %err, "automation stream failed");
                        yield Err(BrowserSseError::Stream(err).into_domain());
                        return;
                    }
                }
            }
            tracing::debug!(id = %request_id, "automation stream completed");
        };

        let events: EventStream = Box::pin(events);
        Ok(events)
    }
}
