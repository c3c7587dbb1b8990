//! Typed view over the payload of a `snapshot` automation event.
//!
//! The full snapshot the automation service emits is open-ended; this keeps
//! only the accessibility-oriented parts callers actually inspect and
//! ignores everything else.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::automation::AutomationEvent;

/// Accessibility snapshot of the current page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotData {
    /// URL of the captured page.
    pub url: Option<String>,
    /// Document title.
    pub title: Option<String>,
    /// Root elements of the accessible tree.
    pub accessible_tree: Vec<AccessibleElement>,
}

impl SnapshotData {
    /// Decode the payload of a `snapshot` event.
    ///
    /// Returns `None` for non-snapshot events, events without data, and
    /// payloads that do not match the expected shape — the format is owned
    /// by the external service, so a mismatch is not an error.
    #[must_use]
    pub fn from_event(event: &AutomationEvent) -> Option<Self> {
        if event.event_type != "snapshot" {
            return None;
        }
        let data = event.data.as_ref()?;
        serde_json::from_value(data.clone()).ok()
    }
}

/// One node of the accessible tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibleElement {
    /// Element reference usable as a `click`/`type` target.
    #[serde(rename = "ref")]
    pub element_ref: Option<String>,
    /// ARIA role.
    pub role: Option<String>,
    /// Accessible name.
    pub name: Option<String>,
    /// Text content, sometimes used instead of `name`.
    pub text: Option<String>,
    /// Child nodes.
    pub children: Vec<AccessibleElement>,
    /// Extra attributes such as `aria-label` or `placeholder`.
    pub attributes: BTreeMap<String, String>,
}

impl AccessibleElement {
    /// Accessible name, falling back to `text` when the name is blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => self.name.as_deref(),
            _ => self.text.as_deref(),
        }
    }
}
