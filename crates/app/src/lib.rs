//! # nlpilot-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TranslationClient` — one-shot natural-language-to-command translation
//!   - `AutomationClient` — submit an automation request, receive its event stream
//! - Define **driving/inbound ports** as use-case structs:
//!   - `BrowserService` — the four fixed browser operations
//!     (navigate, snapshot, click, type)
//!   - `OrchestrationService` — translate a free-text query and dispatch the
//!     resulting command to the matching browser operation
//! - Orchestrate domain objects without knowing *how* the external services
//!   are reached
//!
//! ## Dependency rule
//! Depends on `nlpilot-domain` only (plus stream utilities).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
