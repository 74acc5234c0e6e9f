//! Pipeline orchestration: description in, ranked competitor list out.
//!
//! Control flow is strictly linear: keywords, one search call, noise
//! filter, score and name each survivor, stable sort, truncate. There is
//! no branching workflow and no retry at this layer.
//!
//! The orchestrator's external behavior is total. Every input string
//! produces a competitor list, and the empty list is the only failure
//! signal ever surfaced. The caller cannot distinguish "search failed"
//! from "nothing found"; the downstream narrative step must treat absence
//! as potentially meaningful rather than retryable.

mod types;

pub use types::{Competitor, MAX_COMPETITORS};

use std::collections::HashSet;
use std::panic::AssertUnwindSafe;

use tracing::{debug, error};

use crate::config::DiscoveryConfig;
use crate::gateway::{RawResult, Search, SearchGateway};
use crate::{keywords, naming, noise_filter, scoring};

/// Queries shorter than this are degenerate and never searched
const MIN_QUERY_CHARS: usize = 3;

/// Competitor discovery pipeline over a pluggable search seam.
///
/// Production code uses [`CompetitorPipeline::new`] with the real HTTP
/// gateway; tests inject a mock via [`CompetitorPipeline::with_gateway`].
#[derive(Debug, Clone)]
pub struct CompetitorPipeline<S: Search> {
    gateway: S,
}

impl CompetitorPipeline<SearchGateway> {
    /// Build a pipeline backed by the real search gateway
    #[must_use]
    pub fn new(config: DiscoveryConfig) -> Self {
        Self {
            gateway: SearchGateway::new(config),
        }
    }
}

impl<S: Search> CompetitorPipeline<S> {
    /// Build a pipeline over an arbitrary search implementation
    #[must_use]
    pub fn with_gateway(gateway: S) -> Self {
        Self { gateway }
    }

    /// Find competitors for a product-idea description.
    ///
    /// Never fails: missing credential, transport trouble, malformed
    /// responses, and even internal defects all surface as an empty
    /// list. An empty list is a valid outcome in its own right.
    pub async fn find_competitors(&self, description: &str) -> Vec<Competitor> {
        let query = keywords::extract_keywords(description);
        if query.chars().count() < MIN_QUERY_CHARS {
            debug!("description yielded no usable query, skipping search");
            return Vec::new();
        }

        let Some(raw) = self.gateway.search(&query).await else {
            return Vec::new();
        };
        if raw.is_empty() {
            debug!("search returned no results");
            return Vec::new();
        }

        // Everything after the network call is pure. A panic in here is
        // a bug, not an environmental condition, so it gets logged as an
        // error before collapsing to the same empty outcome.
        match std::panic::catch_unwind(AssertUnwindSafe(|| assemble(&raw, &query))) {
            Ok(competitors) => competitors,
            Err(_) => {
                error!("internal defect while ranking competitors, returning empty list");
                Vec::new()
            }
        }
    }
}

/// Filter, score, name, dedup, rank, and truncate the raw results.
fn assemble(raw: &[RawResult], query: &str) -> Vec<Competitor> {
    let survivors = noise_filter::filter(raw);
    if survivors.is_empty() {
        debug!("noise filter removed every result");
        return Vec::new();
    }

    let mut seen_urls = HashSet::new();
    let mut competitors: Vec<Competitor> = survivors
        .into_iter()
        .filter(|r| seen_urls.insert(r.url.clone()))
        .map(|r| Competitor {
            name: naming::extract_name(&r.title, &r.url),
            relevance_score: scoring::score(&r, query),
            description: r.description,
            url: r.url,
        })
        .collect();

    // sort_by is stable, so equal scores keep their search-result order
    competitors.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    competitors.truncate(MAX_COMPETITORS);
    competitors
}

/// One-shot convenience wrapper: build a pipeline from `config` and run
/// a single discovery pass.
pub async fn find_competitors(config: DiscoveryConfig, description: &str) -> Vec<Competitor> {
    CompetitorPipeline::new(config)
        .find_competitors(description)
        .await
}
