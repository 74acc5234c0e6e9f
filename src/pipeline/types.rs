//! Pipeline output types.

use serde::{Deserialize, Serialize};

/// Maximum number of competitors surfaced to the caller
pub const MAX_COMPETITORS: usize = 5;

/// One ranked competitor.
///
/// Invariants: `relevance_score` is always in 0..=100, `name` is never
/// empty, and `url` is the original search-result URL, never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub description: String,
    pub url: String,

    /// Lexical relevance to the idea's search query, 0..=100
    pub relevance_score: u8,
}
