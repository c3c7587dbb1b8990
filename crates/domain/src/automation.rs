//! Wire shapes exchanged with the browser-automation service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::command::BrowserCommand;
use crate::id::RequestId;

/// Fixed command verb for the navigate operation.
pub const NAVIGATE_COMMAND: &str = "browser_navigate";
/// Fixed command verb for the snapshot operation.
pub const SNAPSHOT_COMMAND: &str = "browser_snapshot";
/// Fixed command verb for the click operation.
pub const CLICK_COMMAND: &str = "browser_click";
/// Fixed command verb for the type operation.
pub const TYPE_COMMAND: &str = "browser_type";

/// Request envelope submitted to the automation service.
///
/// Created once per dispatched action and discarded after submission; the
/// `id` correlates the request with the events of its response stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationRequest {
    /// Correlation identifier, generator-assigned.
    pub id: RequestId,
    /// Fixed automation verb (`browser_navigate`, `browser_snapshot`, …).
    pub command: String,
    /// Action-specific parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl AutomationRequest {
    /// Build a request with a freshly generated id.
    #[must_use]
    pub fn new(command: &str, params: Option<Map<String, Value>>) -> Self {
        Self {
            id: RequestId::new(),
            command: command.to_string(),
            params,
        }
    }

    /// Build the request for a resolved [`BrowserCommand`].
    ///
    /// Param keys match the automation service's wire format: `url` for
    /// navigate, `ref`/`element` for click, `ref`/`element`/`text`/`submit`
    /// for type, and no params for snapshot.
    #[must_use]
    pub fn for_command(command: &BrowserCommand) -> Self {
        match command {
            BrowserCommand::Navigate { url } => {
                let mut params = Map::new();
                params.insert("url".to_string(), Value::String(url.clone()));
                Self::new(NAVIGATE_COMMAND, Some(params))
            }
            BrowserCommand::Snapshot => Self::new(SNAPSHOT_COMMAND, None),
            BrowserCommand::Click {
                element_ref,
                element,
            } => {
                let mut params = Map::new();
                params.insert("ref".to_string(), Value::String(element_ref.clone()));
                params.insert("element".to_string(), Value::String(element.clone()));
                Self::new(CLICK_COMMAND, Some(params))
            }
            BrowserCommand::Type {
                element_ref,
                element,
                text,
                submit,
            } => {
                let mut params = Map::new();
                params.insert("ref".to_string(), Value::String(element_ref.clone()));
                params.insert(
                    "element".to_string(),
                    element.clone().map_or(Value::Null, Value::String),
                );
                params.insert("text".to_string(), Value::String(text.clone()));
                params.insert("submit".to_string(), Value::Bool(*submit));
                Self::new(TYPE_COMMAND, Some(params))
            }
        }
    }
}

/// One event of an automation response stream.
///
/// The `type` field is open-ended (`ack`, `snapshot`, `error`,
/// `stream_chunk`, `stream_end`, …) and defined by the external service.
/// When `type == "error"` the `error` field should carry a message, but
/// consumers tolerate its absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationEvent {
    /// Correlates to the originating request, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Event kind as named by the automation service.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Opaque structured payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Error message, populated for `error` events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AutomationEvent {
    /// Build an `error` event with a freshly generated correlation id.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: Some(RequestId::new().to_string()),
            event_type: "error".to_string(),
            data: None,
            error: Some(message.into()),
        }
    }

    /// Whether this event signals an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.event_type == "error"
    }
}
