//! Shared application state for axum handlers.

use std::sync::Arc;

use nlpilot_app::ports::{AutomationClient, TranslationClient};
use nlpilot_app::services::orchestration_service::OrchestrationService;

/// Application state shared across all axum handlers.
///
/// Generic over the translation and automation clients to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<T, C> {
    /// Query orchestration service (the dispatcher).
    pub orchestration: Arc<OrchestrationService<T, C>>,
}

impl<T, C> Clone for AppState<T, C> {
    fn clone(&self) -> Self {
        Self {
            orchestration: Arc::clone(&self.orchestration),
        }
    }
}

impl<T, C> AppState<T, C>
where
    T: TranslationClient + Send + Sync + 'static,
    C: AutomationClient + Send + Sync + 'static,
{
    /// Create a new application state from the orchestration service.
    pub fn new(orchestration: OrchestrationService<T, C>) -> Self {
        Self {
            orchestration: Arc::new(orchestration),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service needs to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arc(orchestration: Arc<OrchestrationService<T, C>>) -> Self {
        Self { orchestration }
    }
}
