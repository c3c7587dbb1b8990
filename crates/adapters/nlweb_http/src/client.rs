//! HTTP implementation of the translation port.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use nlpilot_app::ports::TranslationClient;
use nlpilot_domain::command::CommandEnvelope;
use nlpilot_domain::error::NlPilotError;

use crate::config::NlWebConfig;
use crate::error::NlWebError;

/// Target recorded in error-shaped envelopes produced by this gateway.
const ERROR_TARGET: &str = "nlweb_client";

/// Request body sent to the NLWeb endpoint.
#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Reply wrapper carrying the nested command envelope.
#[derive(Deserialize)]
struct TranslationReply {
    #[serde(rename = "mcpCommand")]
    command: Option<CommandEnvelope>,
}

/// Translation gateway backed by a reqwest client.
pub struct HttpTranslationClient {
    client: reqwest::Client,
    url: String,
}

impl HttpTranslationClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NlWebError::Build`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &NlWebConfig) -> Result<Self, NlWebError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(NlWebError::Build)?;
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

    async fn call(&self, query: &str) -> Result<CommandEnvelope, NlWebError> {
        let response = self
            .client
            .post(&self.url)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(NlWebError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NlWebError::Status {
                status: status.as_u16(),
            });
        }

        let reply: TranslationReply = response.json().await.map_err(NlWebError::Decode)?;
        reply.command.ok_or(NlWebError::EmptyReply)
    }
}

impl TranslationClient for HttpTranslationClient {
    /// Translate `query`, folding every upstream failure into an
    /// error-shaped envelope. This method never returns `Err`.
    async fn translate(&self, query: &str) -> Result<CommandEnvelope, NlPilotError> {
        tracing::debug!(url = %self.url, query, "sending query to NLWeb service");
        match self.call(query).await {
            Ok(envelope) => {
                tracing::info!(
                    action = %envelope.action,
                    target = envelope.target.as_deref().unwrap_or_default(),
                    "received command from NLWeb service"
                );
                Ok(envelope)
            }
            Err(err) => {
                tracing::warn!(error = %err, "NLWeb call failed, degrading to error envelope");
                Ok(CommandEnvelope::error(ERROR_TARGET, err.to_string()))
            }
        }
    }
}
