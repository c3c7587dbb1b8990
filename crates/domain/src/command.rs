//! Command envelope — the `{action, target, params}` triple produced by the
//! natural-language translation service, and its interpretation into a
//! typed [`BrowserCommand`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{NlPilotError, ValidationError};

/// Params key carrying the diagnostic text of an error-shaped envelope.
pub const ERROR_MESSAGE_KEY: &str = "errorMessage";

/// Fallback diagnostic when an error-shaped envelope carries no message.
pub const DEFAULT_ERROR_MESSAGE: &str = "Error from NLWeb service";

/// Description used when `click` params omit `elementDescription`.
pub const UNKNOWN_ELEMENT: &str = "Unknown element";

/// Abstract command returned by the translation service.
///
/// `action` is always present and non-empty. `target` and `params` are
/// action-dependent: `target` carries the URL for `navigate` and the element
/// reference for `click`/`type`; `params` carries `elementDescription`,
/// `text`, and `submit` where applicable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    /// Action name, matched case-insensitively.
    pub action: String,
    /// Action-dependent target (URL or element reference).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Action-specific parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl CommandEnvelope {
    /// Build an error-shaped envelope, the sentinel returned by the
    /// translation gateway when the upstream call yields nothing usable.
    #[must_use]
    pub fn error(target: impl Into<String>, message: impl Into<String>) -> Self {
        let mut params = Map::new();
        params.insert(ERROR_MESSAGE_KEY.to_string(), Value::String(message.into()));
        Self {
            action: "error".to_string(),
            target: Some(target.into()),
            params: Some(params),
        }
    }

    /// Whether this envelope signals an upstream translation failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.action.eq_ignore_ascii_case("error")
    }

    /// Diagnostic text of an error-shaped envelope, with a default when the
    /// `errorMessage` param is absent or not a string.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.params
            .as_ref()
            .and_then(|params| params.get(ERROR_MESSAGE_KEY))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_string()
    }

    /// Validate the envelope and resolve it into a typed [`BrowserCommand`].
    ///
    /// Action matching is case-insensitive. Error-shaped envelopes are not
    /// handled here — callers check [`is_error`](Self::is_error) first.
    ///
    /// # Errors
    ///
    /// Returns [`NlPilotError::Validation`] when a required field is missing
    /// or blank for the resolved action, and [`NlPilotError::UnknownAction`]
    /// when the action is outside the fixed set.
    pub fn interpret(&self) -> Result<BrowserCommand, NlPilotError> {
        match self.action.to_ascii_lowercase().as_str() {
            "navigate" => {
                let url = self.require_target("navigate")?;
                Ok(BrowserCommand::Navigate { url })
            }
            "snapshot" => Ok(BrowserCommand::Snapshot),
            "click" => {
                let element_ref = self.require_target("click")?;
                let element = self
                    .param_str("elementDescription")
                    .unwrap_or(UNKNOWN_ELEMENT)
                    .to_string();
                Ok(BrowserCommand::Click {
                    element_ref,
                    element,
                })
            }
            "type" => {
                let element_ref = self.require_target("type")?;
                let params = self.params.as_ref().ok_or(ValidationError::MissingParams)?;
                let text = params
                    .get("text")
                    .and_then(Value::as_str)
                    .ok_or(ValidationError::MissingText)?
                    .to_string();
                let element = self.param_str("elementDescription").map(str::to_string);
                let submit = coerce_submit(params.get("submit"));
                Ok(BrowserCommand::Type {
                    element_ref,
                    element,
                    text,
                    submit,
                })
            }
            other => Err(NlPilotError::UnknownAction(other.to_string())),
        }
    }

    fn require_target(&self, action: &'static str) -> Result<String, ValidationError> {
        match self.target.as_deref().map(str::trim) {
            Some(target) if !target.is_empty() => Ok(target.to_string()),
            _ => Err(ValidationError::MissingTarget { action }),
        }
    }

    fn param_str(&self, key: &str) -> Option<&str> {
        self.params
            .as_ref()
            .and_then(|params| params.get(key))
            .and_then(Value::as_str)
    }
}

/// One variant per automation operation, so dispatch is exhaustive at
/// compile time instead of open-ended string branching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCommand {
    /// Open a URL in the browser.
    Navigate {
        /// Absolute URL to load.
        url: String,
    },
    /// Capture an accessibility snapshot of the current page.
    Snapshot,
    /// Click an element.
    Click {
        /// Element reference from a previous snapshot.
        element_ref: String,
        /// Human-readable element description.
        element: String,
    },
    /// Type text into an element, optionally submitting afterwards.
    Type {
        /// Element reference from a previous snapshot.
        element_ref: String,
        /// Human-readable element description, when the translation
        /// provided one.
        element: Option<String>,
        /// Text to type.
        text: String,
        /// Whether to submit (press Enter) after typing.
        submit: bool,
    },
}

/// Coerce the `submit` param into a boolean.
///
/// Booleans pass through; strings parse case-insensitively, where anything
/// other than a `"true"` token is `false`; any other type or absence is
/// `false`.
#[must_use]
pub fn coerce_submit(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text.eq_ignore_ascii_case("true"),
        _ => false,
    }
}
