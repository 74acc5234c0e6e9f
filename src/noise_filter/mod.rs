//! Noise filtering for raw search results.
//!
//! Raw web-search output skews heavily toward editorial content: news
//! coverage, listicles, encyclopedia entries, social-platform pages. This
//! filter removes everything structurally unlikely to be a competitor
//! product page, then keeps a survivor only if it shows at least one
//! positive product signal. The asymmetry (exclude-by-negative,
//! include-by-positive-or-simplicity) is intentional and must lean
//! aggressive.

use once_cell::sync::Lazy;
use tracing::debug;
use url::Url;

use crate::gateway::RawResult;

/// Maximum path depth (segments beyond the host) for a URL to still look
/// like a homepage rather than a deep content page
const SHALLOW_PATH_DEPTH: usize = 2;

/// Generic, informational, and social hosts that never represent a
/// competitor's own product page. Matches the host and any subdomain.
static EXCLUDED_DOMAINS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "wikipedia.org",
        "wikihow.com",
        "britannica.com",
        "linkedin.com",
        "facebook.com",
        "twitter.com",
        "x.com",
        "instagram.com",
        "tiktok.com",
        "pinterest.com",
        "youtube.com",
        "vimeo.com",
        "reddit.com",
        "quora.com",
        "stackoverflow.com",
        "github.com",
        "medium.com",
        "substack.com",
        "wordpress.com",
        "blogspot.com",
        "producthunt.com",
        "crunchbase.com",
        "g2.com",
        "capterra.com",
        "trustpilot.com",
        "glassdoor.com",
        "indeed.com",
        "amazon.com",
    ]
});

/// URL path segments that mark editorial content rather than a product
static EDITORIAL_PATH_SEGMENTS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "/blog/",
        "/news/",
        "/article/",
        "/guide/",
        "/tutorial/",
        "/review/",
        "/vs/",
        "/comparison/",
    ]
});

/// Title fragments that mark listicles and tutorials
static EXCLUDED_TITLE_PHRASES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["how to", "guide to", "best"]);

/// Tokens that suggest an actual product lives behind the page
static PRODUCT_SIGNALS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "pricing",
        "features",
        "demo",
        "signup",
        "sign up",
        "login",
        "log in",
        "free trial",
        "get started",
        "platform",
        "software",
        "tool",
        "app.",
        "dashboard",
    ]
});

/// Keep only results that plausibly point at competitor product pages.
///
/// Applies three exclusion rules (denylisted host, editorial path
/// segment, listicle/tutorial title), then requires at least one positive
/// signal: a product-indicator token anywhere in url/title/description,
/// or a shallow URL path. Pure, order-preserving subset operation.
#[must_use]
pub fn filter(results: &[RawResult]) -> Vec<RawResult> {
    let kept: Vec<RawResult> = results
        .iter()
        .filter(|r| is_candidate(r))
        .cloned()
        .collect();
    debug!(input = results.len(), kept = kept.len(), "noise filter applied");
    kept
}

fn is_candidate(result: &RawResult) -> bool {
    let url = result.url.to_lowercase();
    let title = result.title.to_lowercase();
    let description = result.description.to_lowercase();

    if let Some(host) = host_of(&url)
        && EXCLUDED_DOMAINS
            .iter()
            .any(|d| host == *d || host.ends_with(&format!(".{d}")))
    {
        return false;
    }

    let path = path_of(&url);
    if EDITORIAL_PATH_SEGMENTS
        .iter()
        .any(|seg| path.contains(seg) || path.ends_with(seg.trim_end_matches('/')))
    {
        return false;
    }

    if EXCLUDED_TITLE_PHRASES.iter().any(|p| title.contains(p)) {
        return false;
    }

    // Survivors still need a reason to stay in
    let has_product_signal = PRODUCT_SIGNALS
        .iter()
        .any(|s| url.contains(s) || title.contains(s) || description.contains(s));
    has_product_signal || path_depth(&path) <= SHALLOW_PATH_DEPTH
}

/// Extract the host, falling back to a lexical scan when the URL does
/// not parse (untrusted input, so this must never panic).
fn host_of(url: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(url) {
        return parsed.host_str().map(str::to_string);
    }
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = stripped.split(['/', '?', '#']).next()?;
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Extract the path portion, tolerating malformed URLs
fn path_of(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        return parsed.path().to_string();
    }
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    match stripped.find('/') {
        Some(idx) => stripped[idx..]
            .split(['?', '#'])
            .next()
            .unwrap_or("")
            .to_string(),
        None => String::from("/"),
    }
}

/// Number of non-empty path segments beyond the host
fn path_depth(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}
