//! Search gateway: the pipeline's single outbound network call.
//!
//! Issues exactly one HTTP GET per invocation against the configured
//! web-search endpoint, under a hard client-side timeout. Every failure
//! mode (missing credential, transport error, timeout, rate limit,
//! unexpected status, unparseable body) is converted into `None` so the
//! pipeline downstream never needs an error-handling branch for this call.

mod types;

pub use types::{RawResult, SearchResponse, SUBSCRIPTION_TOKEN_HEADER, WebResults};

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::DiscoveryConfig;

/// The seam between the pipeline and the outside world.
///
/// `None` means "no data" for any reason whatsoever; implementations must
/// never surface an error. The pipeline tests substitute a mock here to
/// assert that degenerate inputs never reach the network.
pub trait Search {
    fn search(&self, query: &str) -> impl Future<Output = Option<Vec<RawResult>>> + Send;
}

/// Internal failure classification for the request path.
///
/// These never cross the public boundary; they exist so the log line can
/// say which of the expected failure modes occurred.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rate limited by search service (HTTP 429)")]
    RateLimited,

    #[error("search service returned HTTP {0}")]
    Status(StatusCode),

    #[error("invalid search endpoint '{endpoint}': {source}")]
    Endpoint {
        endpoint: String,
        source: url::ParseError,
    },
}

/// HTTP client for the external web-search service.
///
/// Holds only a [`reqwest::Client`] and its configuration; cloning is
/// cheap and concurrent use is safe because nothing here is mutated.
#[derive(Debug, Clone)]
pub struct SearchGateway {
    client: reqwest::Client,
    config: DiscoveryConfig,
}

impl SearchGateway {
    /// Create a gateway from an explicit configuration.
    ///
    /// The credential travels inside `config`; there is no hidden
    /// environment lookup at call time.
    #[must_use]
    pub fn new(config: DiscoveryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Issue one search request, collapsing every failure to `None`.
    ///
    /// Returns `None` without touching the network when no credential is
    /// configured. A `Some(vec![])` means the service answered with no
    /// hits, which is distinct only internally; the pipeline treats both
    /// as an empty competitor list.
    pub async fn search(&self, query: &str) -> Option<Vec<RawResult>> {
        let Some(api_key) = self.config.api_key() else {
            info!("no search credential configured, skipping competitor search");
            return None;
        };

        let timeout = Duration::from_secs(self.config.timeout_secs());
        match tokio::time::timeout(timeout, self.request(api_key, query)).await {
            Ok(Ok(results)) => {
                debug!(count = results.len(), "search returned results");
                Some(results)
            }
            Ok(Err(GatewayError::RateLimited)) => {
                warn!("search service rate limited the request");
                None
            }
            Ok(Err(e)) => {
                warn!("search request failed: {e}");
                None
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.config.timeout_secs(),
                    "search request timed out, abandoning in-flight call"
                );
                None
            }
        }
    }

    /// The fallible request path. Exactly one GET, no retries; retry
    /// policy belongs to callers above this layer, if anywhere.
    async fn request(&self, api_key: &str, query: &str) -> Result<Vec<RawResult>, GatewayError> {
        let mut endpoint =
            Url::parse(self.config.endpoint()).map_err(|source| GatewayError::Endpoint {
                endpoint: self.config.endpoint().to_string(),
                source,
            })?;
        endpoint
            .query_pairs_mut()
            .append_pair("q", query)
            .append_pair("count", &self.config.result_count().to_string());

        debug!(%endpoint, "issuing search request");
        let response = self
            .client
            .get(endpoint)
            .header(SUBSCRIPTION_TOKEN_HEADER, api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GatewayError::RateLimited);
        }
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        // A body missing the nested results list parses to "no results";
        // only a body that is not the expected JSON shape at all errors.
        let body: SearchResponse = response.json().await?;
        Ok(body.into_results())
    }
}

impl Search for SearchGateway {
    fn search(&self, query: &str) -> impl Future<Output = Option<Vec<RawResult>>> + Send {
        SearchGateway::search(self, query)
    }
}
