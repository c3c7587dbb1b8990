//! NLWeb gateway configuration.

use serde::Deserialize;

/// Configuration for the NLWeb translation gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NlWebConfig {
    /// Endpoint accepting `{query}` and replying with `{mcpCommand}`.
    pub url: String,
    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NlWebConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000/ask".to_string(),
            timeout_secs: 30,
        }
    }
}
