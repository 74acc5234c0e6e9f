//! Fluent builder for `DiscoveryConfig`.
//!
//! Every field has a sensible default, so the builder has no required
//! states; `DiscoveryConfig::default()` is a credential-less configuration
//! that produces empty results without ever touching the network.

use super::types::{
    DEFAULT_ENDPOINT, DEFAULT_RESULT_COUNT, DEFAULT_TIMEOUT_SECS, DiscoveryConfig,
};

#[derive(Debug, Clone)]
pub struct DiscoveryConfigBuilder {
    api_key: Option<String>,
    endpoint: String,
    timeout_secs: u64,
    result_count: usize,
}

impl DiscoveryConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            result_count: DEFAULT_RESULT_COUNT,
        }
    }

    /// Set (or clear) the search credential
    #[must_use]
    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Override the search endpoint (used by tests to target a mock server)
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the client-side timeout
    #[must_use]
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Override the result-count cap
    #[must_use]
    pub fn result_count(mut self, result_count: usize) -> Self {
        self.result_count = result_count;
        self
    }

    #[must_use]
    pub fn build(self) -> DiscoveryConfig {
        DiscoveryConfig {
            api_key: self.api_key,
            endpoint: self.endpoint,
            timeout_secs: self.timeout_secs,
            result_count: self.result_count,
        }
    }
}

impl Default for DiscoveryConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
