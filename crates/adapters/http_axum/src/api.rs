//! JSON/SSE API handlers.

use axum::Router;
use axum::routing::post;

use nlpilot_app::ports::{AutomationClient, TranslationClient};

use crate::state::AppState;

pub mod query;

/// Build the `/api` sub-router.
pub fn routes<T, C>() -> Router<AppState<T, C>>
where
    T: TranslationClient + Send + Sync + 'static,
    C: AutomationClient + Send + Sync + 'static,
{
    Router::new().route("/query", post(query::process))
}
