//! # nlpilot-adapter-nlweb-http
//!
//! Translation gateway — bridges the external NLWeb service into nlpilot.
//!
//! ## Responsibilities
//! - POST the free-text query to the NLWeb endpoint as JSON
//! - Decode the nested command envelope from the reply
//! - Degrade **every** upstream failure (transport error, bad status,
//!   malformed body, absent command) into an error-shaped envelope rather
//!   than an `Err` — callers treat `action == "error"` as the sentinel for
//!   upstream failure
//! - No retries; a failed call is terminal for that request
//!
//! ## Dependency rule
//! Depends on `nlpilot-app` (for the port trait) and `nlpilot-domain`.
//! Never leaks reqwest types across the port boundary.

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpTranslationClient;
pub use config::NlWebConfig;
pub use error::NlWebError;
