//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use nlpilot_app::ports::{AutomationClient, TranslationClient};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api`. Includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<T, C>(state: AppState<T, C>) -> Router
where
    T: TranslationClient + Send + Sync + 'static,
    C: AutomationClient + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use nlpilot_app::ports::EventStream;
    use nlpilot_app::services::browser_service::BrowserService;
    use nlpilot_app::services::orchestration_service::OrchestrationService;
    use nlpilot_domain::automation::{AutomationEvent, AutomationRequest};
    use nlpilot_domain::command::CommandEnvelope;
    use nlpilot_domain::error::NlPilotError;

    /// Replies with a fixed envelope.
    struct StubTranslator {
        envelope: CommandEnvelope,
    }

    impl TranslationClient for StubTranslator {
        fn translate(
            &self,
            _query: &str,
        ) -> impl Future<Output = Result<CommandEnvelope, NlPilotError>> + Send {
            let envelope = self.envelope.clone();
            async move { Ok(envelope) }
        }
    }

    /// Echoes a single `ack` correlated with the submitted request.
    struct StubAutomation;

    impl AutomationClient for StubAutomation {
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
            async move { Ok(Box::pin(tokio_stream::once(Ok(event))) as EventStream) }
        }
    }

    fn app(envelope: CommandEnvelope) -> Router {
        let orchestration = OrchestrationService::new(
            StubTranslator { envelope },
            BrowserService::new(StubAutomation),
        );
        build(AppState::new(orchestration))
    }

    fn query_request(query: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/query")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!("{{\"query\":{}}}", serde_json::json!(query))))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn navigate_envelope() -> CommandEnvelope {
        CommandEnvelope {
            action: "navigate".to_string(),
            target: Some("http://example.com".to_string()),
            params: None,
        }
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app(navigate_envelope())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_blank_query_with_bad_request() {
        let response = app(navigate_envelope())
            .oneshot(query_request("   "))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_text(response).await;
        assert!(body.contains("query cannot be empty"));
    }

    #[tokio::test]
    async fn should_stream_events_for_valid_query() {
        let response = app(navigate_envelope())
            .oneshot(query_request("open example"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/event-stream")
        );
        let body = body_text(response).await;
        assert!(body.contains("\"type\":\"ack\""));
    }

    #[tokio::test]
    async fn should_deliver_translation_failure_as_in_band_error_event() {
        let envelope = CommandEnvelope::error("nlweb_client", "upstream exploded");
        let response = app(envelope)
            .oneshot(query_request("open example"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("\"type\":\"error\""));
        assert!(body.contains("upstream exploded"));
        assert_eq!(body.matches("data:").count(), 1);
    }

    #[tokio::test]
    async fn should_deliver_fatal_dispatch_failure_as_in_band_error_event() {
        let envelope = CommandEnvelope {
            action: "unknown_action".to_string(),
            target: None,
            params: None,
        };
        let response = app(envelope)
            .oneshot(query_request("do something"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("\"type\":\"error\""));
        assert!(body.contains("unknown action: unknown_action"));
    }
}
