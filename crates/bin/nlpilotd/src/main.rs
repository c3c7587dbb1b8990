//! # nlpilotd — nlpilot daemon
//!
//! Composition root that wires the gateways together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `tracing` subscriber
//! - Construct the gateway clients (adapters)
//! - Construct application services, injecting clients via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use nlpilot_adapter_browser_sse::SseAutomationClient;
use nlpilot_adapter_http_axum::state::AppState;
use nlpilot_adapter_nlweb_http::HttpTranslationClient;
use nlpilot_app::services::browser_service::BrowserService;
use nlpilot_app::services::orchestration_service::OrchestrationService;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Gateways
    let translator = HttpTranslationClient::new(&config.nlweb)?;
    let automation = SseAutomationClient::new(&config.browser)?;

    // Services
    let orchestration = OrchestrationService::new(translator, BrowserService::new(automation));

    // HTTP
    let state = AppState::new(orchestration);
    let app = nlpilot_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, nlweb = %config.nlweb.url, browser = %config.browser.url, "nlpilotd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
    }
    tracing::info!("shutdown signal received");
}
