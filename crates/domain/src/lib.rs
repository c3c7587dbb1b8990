//! # nlpilot-domain
//!
//! Pure domain model for the nlpilot natural-language browser orchestrator.
//!
//! ## Responsibilities
//! - Foundational types: typed request identifiers, error conventions
//! - Define the **Command Envelope** (the `{action, target, params}` triple
//!   produced by the translation service)
//! - Define **Browser Commands** (the fixed set of automation operations:
//!   navigate, snapshot, click, type)
//! - Define **Automation Requests** and **Automation Events** (the wire
//!   shapes exchanged with the browser-automation service)
//! - Contain all invariant enforcement: field validation per action and the
//!   `submit` flag coercion rules
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod automation;
pub mod command;
pub mod error;
pub mod id;
pub mod snapshot;
