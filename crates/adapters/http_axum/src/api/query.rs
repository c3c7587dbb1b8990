//! Ingress endpoint — `POST /api/query` streaming automation events.

use std::convert::Infallible;

use async_stream::stream;
use axum::Json;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use serde::Deserialize;
use tokio_stream::{Stream, StreamExt};

use nlpilot_app::ports::{AutomationClient, TranslationClient};
use nlpilot_domain::automation::AutomationEvent;
use nlpilot_domain::error::{NlPilotError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the ingress endpoint.
#[derive(Deserialize)]
pub struct QueryRequest {
    /// Free-text natural-language query.
    #[serde(default)]
    pub query: String,
}

/// `POST /api/query` — process a natural-language query.
///
/// A blank query is rejected with `400` before the dispatcher runs — the
/// only transport-level failure. Every later failure is delivered in-band:
/// the stream ends with a single `type="error"` event carrying the
/// underlying failure text, and the HTTP response itself stays successful.
///
/// Events stream incrementally; when the client disconnects, the stream is
/// dropped and with it the in-flight upstream call.
pub async fn process<T, C>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<QueryRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError>
where
    T: TranslationClient + Send + Sync + 'static,
    C: AutomationClient + Send + Sync + 'static,
{
    if request.query.trim().is_empty() {
        tracing::warn!("received blank query");
        return Err(NlPilotError::from(ValidationError::EmptyQuery).into());
    }

    let outcome = state.orchestration.process_query(&request.query).await;

    let frames = stream! {
        match outcome {
            Ok(mut events) => {
                while let Some(item) = events.next().await {
                    match item {
                        Ok(event) => {
                            if let Some(frame) = encode(&event) {
                                yield Ok(frame);
                            }
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "query stream failed");
                            let event =
                                AutomationEvent::error(format!("Failed to process query: {err}"));
                            if let Some(frame) = encode(&event) {
                                yield Ok(frame);
                            }
                            break;
                        }
                    }
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to process query");
                let event = AutomationEvent::error(format!("Failed to process query: {err}"));
                if let Some(frame) = encode(&event) {
                    yield Ok(frame);
                }
            }
        }
    };

    Ok(Sse::new(frames).keep_alive(KeepAlive::default()))
}

/// Serialize an event into an SSE `data:` frame, skipping (with a warning)
/// the event if serialization fails.
fn encode(event: &AutomationEvent) -> Option<Event> {
    match Event::default().json_data(event) {
        Ok(frame) => Some(frame),
        Err(err) => {
            tracing::warn!(%err, "failed to serialize event for SSE stream");
            None
        }
    }
}
