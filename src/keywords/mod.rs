//! Keyword extraction from free-text idea descriptions.
//!
//! Turns an arbitrary description into a short, search-engine-friendly
//! query. The extraction is purely lexical: lowercase, strip punctuation,
//! drop short and stop-word tokens, keep the first few survivors in their
//! original order. No frequency ranking, no stemming.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Maximum number of tokens carried into the search query
pub const MAX_QUERY_TOKENS: usize = 6;

/// Tokens this short are never useful search terms
const MIN_TOKEN_LEN: usize = 3;

/// Words that carry no search signal: articles, conjunctions, common
/// auxiliaries, and the handful of verbs every product idea uses
/// ("I want to build an app that...").
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "that", "this", "with", "from", "are", "was",
        "were", "will", "would", "could", "should", "have", "has", "had",
        "can", "but", "not", "you", "your", "our", "their", "they", "them",
        "its", "it's", "into", "onto", "about", "than", "then", "there",
        "here", "where", "when", "which", "while", "who", "whom", "what",
        "how", "why", "all", "any", "some", "also", "just", "like", "want",
        "need", "help", "make", "makes", "build", "builds", "building",
        "create", "creates", "creating", "use", "uses", "using", "allow",
        "allows", "let", "lets", "get", "gets",
    ]
    .into_iter()
    .collect()
});

/// Extract a search query from a raw idea description.
///
/// Lowercases the input, strips punctuation except internal hyphens,
/// discards tokens shorter than three characters or present in the
/// stop-word set, and joins the first [`MAX_QUERY_TOKENS`] survivors with
/// single spaces, preserving their original order.
///
/// Returns an empty string when nothing usable survives; the caller must
/// treat that as "skip the search entirely".
///
/// # Examples
/// ```
/// use competitor_scout::keywords::extract_keywords;
///
/// let query = extract_keywords("I want to build an AI-powered study app for college students");
/// assert_eq!(query, "ai-powered study app college students");
///
/// assert_eq!(extract_keywords("hi"), "");
/// ```
#[must_use]
pub fn extract_keywords(description: &str) -> String {
    let lowered = description.to_lowercase();

    let tokens: Vec<String> = lowered
        .split_whitespace()
        .filter_map(|word| {
            let cleaned: String = word
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect();
            // Internal hyphens survive; leading/trailing ones are punctuation
            let cleaned = cleaned.trim_matches('-');
            // Character count, not byte length: a two-character CJK token
            // must be discarded like any other two-character token
            if cleaned.chars().count() < MIN_TOKEN_LEN || STOP_WORDS.contains(cleaned) {
                None
            } else {
                Some(cleaned.to_string())
            }
        })
        .take(MAX_QUERY_TOKENS)
        .collect();

    tokens.join(" ")
}

/// Split an already-extracted query back into its scoring tokens.
///
/// The relevance scorer must reuse the exact token list the query was
/// built from rather than re-extracting, so this applies only the length
/// gate (queries never contain stop words or punctuation by construction).
#[must_use]
pub fn query_tokens(query: &str) -> Vec<&str> {
    query
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}
