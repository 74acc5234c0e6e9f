//! Wire types for the external web-search service.

use serde::{Deserialize, Serialize};

/// Header carrying the static per-deployment search credential
pub const SUBSCRIPTION_TOKEN_HEADER: &str = "X-Subscription-Token";

/// One untrusted hit from the search service.
///
/// Any field may be empty or malformed; downstream stages must cope.
/// Missing JSON fields deserialize to empty strings rather than failing
/// the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub url: String,
}

impl RawResult {
    /// Create a `RawResult` (mainly a convenience for tests)
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }
}

/// Top-level response body from the search service.
///
/// The service nests its hits under `web.results`. An absent or
/// malformed `web` section means "no results", never a parse error.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub web: Option<WebResults>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebResults {
    #[serde(default)]
    pub results: Vec<RawResult>,
}

impl SearchResponse {
    /// Flatten the nested response into the hit list, treating any
    /// missing layer as empty.
    #[must_use]
    pub fn into_results(self) -> Vec<RawResult> {
        self.web.map(|web| web.results).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let parsed: RawResult = serde_json::from_str(r#"{"title": "Acme"}"#)
            .expect("partial result should deserialize");
        assert_eq!(parsed.title, "Acme");
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.url, "");
    }

    #[test]
    fn absent_web_section_is_no_results() {
        let parsed: SearchResponse =
            serde_json::from_str("{}").expect("empty object should deserialize");
        assert!(parsed.into_results().is_empty());
    }
}
