//! Browser automation gateway configuration.

use serde::Deserialize;

/// Configuration for the browser-automation gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Endpoint accepting a command envelope and replying with an SSE
    /// stream.
    pub url: String,
    /// TCP connect timeout in seconds. There is deliberately no overall
    /// request timeout: the reply is an open-ended event stream.
    pub connect_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8931/sse".to_string(),
            connect_timeout_secs: 10,
        }
    }
}
