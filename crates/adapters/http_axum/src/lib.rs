//! # nlpilot-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the ingress endpoint: `POST /api/query` accepting
//!   `{"query": string}` and replying with a `text/event-stream` of
//!   JSON-encoded automation events
//! - Reject blank queries with a client error **before** invoking the
//!   dispatcher — the only failure reported at the transport level
//! - Convert every other failure, including fatal dispatcher errors and
//!   mid-stream automation failures, into a single terminal in-band `error`
//!   event while the HTTP response itself stays successful
//! - Map application results into HTTP responses (driving adapter)
//!
//! ## Dependency rule
//! Depends on `nlpilot-app` (for port traits and services) and
//! `nlpilot-domain` (for wire types). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
