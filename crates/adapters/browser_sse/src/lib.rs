//! # nlpilot-adapter-browser-sse
//!
//! Automation gateway — bridges the external browser-automation service
//! into nlpilot.
//!
//! ## Responsibilities
//! - POST the automation request as JSON; the response body of that single
//!   call **is** the event stream (`text/event-stream`) — there is no
//!   separate stream-address negotiation step
//! - Decode each SSE `data` frame into one automation event and relay it
//!   unmodified — no filtering, buffering, or reordering
//! - Propagate transport and decode failures as fatal stream errors
//!   (never swallowed)
//!
//! ## Dependency rule
//! Depends on `nlpilot-app` (for the port trait) and `nlpilot-domain`.
//! Never leaks reqwest or SSE types across the port boundary.

pub mod client;
pub mod config;
pub mod error;

pub use client::SseAutomationClient;
pub use config::BrowserConfig;
pub use error::BrowserSseError;
