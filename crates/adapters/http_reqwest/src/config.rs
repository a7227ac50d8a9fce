//! HTTP fetcher configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the reqwest services fetcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpFetcherConfig {
    /// Origin the (usually relative) services URL is resolved against.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl HttpFetcherConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
