//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use nlpilot_domain::error::NlPilotError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`NlPilotError`] to an HTTP response with appropriate status code.
///
/// In practice only the blank-query validation surfaces here; everything
/// past that point is reported in-band as a stream event.
pub struct ApiError(NlPilotError);

impl From<NlPilotError> for ApiError {
    fn from(err: NlPilotError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            NlPilotError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            NlPilotError::UnknownAction(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string())
            }
            NlPilotError::Upstream(err) => {
                tracing::error!(error = %err, "upstream service error");
                (StatusCode::BAD_GATEWAY, "upstream service error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
