//! Lexical relevance scoring for filtered search results.
//!
//! Scores are built from plain substring containment, not term frequency
//! or semantic similarity. Reproducing exact numbers elsewhere requires
//! matching these token-for-token substring semantics.

use once_cell::sync::Lazy;

use crate::gateway::RawResult;
use crate::keywords::query_tokens;

/// Every result starts here before bonuses
const BASELINE_SCORE: i32 = 50;

/// Bonus per query token found in the title
const TITLE_TOKEN_BONUS: i32 = 10;

/// Bonus per query token found in the description
const DESCRIPTION_TOKEN_BONUS: i32 = 5;

/// One-time bonus for SaaS-shaped URLs
const SAAS_URL_BONUS: i32 = 15;

/// One-time bonus for product terminology in the description
const PRODUCT_TERM_BONUS: i32 = 10;

/// URL substrings typical of hosted products (app.foo.com, getfoo.com,
/// usefoo.com, my.foo.com)
static SAAS_URL_MARKERS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["app.", "get", "use", "my."]);

/// Generic product terminology worth a flat description bonus
static PRODUCT_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec!["platform", "software", "app", "tool", "service", "solution"]
});

/// Score one result against the query, in [0, 100].
///
/// Baseline 50; each query token longer than two characters adds 10 when
/// it appears in the title and 5 when it appears in the description. A
/// SaaS-shaped URL marker adds a flat 15 and product terminology in the
/// description a flat 10, each at most once.
///
/// The final clamp is a safety invariant rather than a reachable branch
/// under the current weights; keep it if the weights ever change.
#[must_use]
pub fn score(result: &RawResult, query: &str) -> u8 {
    let title = result.title.to_lowercase();
    let description = result.description.to_lowercase();
    let url = result.url.to_lowercase();

    let mut score = BASELINE_SCORE;

    for token in query_tokens(query) {
        if title.contains(token) {
            score += TITLE_TOKEN_BONUS;
        }
        if description.contains(token) {
            score += DESCRIPTION_TOKEN_BONUS;
        }
    }

    if SAAS_URL_MARKERS.iter().any(|m| url.contains(m)) {
        score += SAAS_URL_BONUS;
    }
    if PRODUCT_TERMS.iter().any(|t| description.contains(t)) {
        score += PRODUCT_TERM_BONUS;
    }

    score.clamp(0, 100) as u8
}
