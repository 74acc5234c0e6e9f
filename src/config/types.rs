//! Core configuration types for competitor discovery.

use serde::{Deserialize, Serialize};

/// Default web-search endpoint (Brave-style search API)
pub const DEFAULT_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

/// Default client-side timeout for the single outbound search call
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default result-count cap requested from the search service
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Environment variable consulted by [`DiscoveryConfig::from_env`]
pub const API_KEY_ENV_VAR: &str = "SEARCH_API_KEY";

/// Configuration for the search gateway and discovery pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Static per-deployment search credential.
    ///
    /// `None` is a valid configuration state, not an error: the gateway
    /// silently returns no data and the pipeline yields an empty list.
    pub(crate) api_key: Option<String>,

    /// Search service endpoint. Overridable so tests can point the
    /// gateway at a local mock server.
    pub(crate) endpoint: String,

    /// Client-side timeout in seconds for the search request
    pub(crate) timeout_secs: u64,

    /// Number of results requested from the service
    pub(crate) result_count: usize,
}

impl DiscoveryConfig {
    /// Start building a configuration
    #[must_use]
    pub fn builder() -> super::DiscoveryConfigBuilder {
        super::DiscoveryConfigBuilder::new()
    }

    /// Build a configuration with the credential taken from the
    /// `SEARCH_API_KEY` environment variable, read once here rather than
    /// on every search call.
    #[must_use]
    pub fn from_env() -> Self {
        Self::builder()
            .api_key(std::env::var(API_KEY_ENV_VAR).ok())
            .build()
    }

    /// The configured credential, if any
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The search service endpoint
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Client-side timeout in seconds
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Result-count cap requested from the service
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.result_count
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
