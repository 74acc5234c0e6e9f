//! Tests for the lexical relevance scorer.

use competitor_scout::RawResult;
use competitor_scout::scoring::score;
use proptest::prelude::*;

#[test]
fn test_baseline_with_no_matches() {
    let result = RawResult::new("Widget Co", "We sell widgets", "https://example.org");
    assert_eq!(score(&result, "quantum cryptography"), 50);
}

#[test]
fn test_title_token_worth_ten() {
    let result = RawResult::new("Invoice Ninja", "", "https://invoiceninja.com");
    assert_eq!(score(&result, "invoice"), 60);
}

#[test]
fn test_description_token_worth_five() {
    let result = RawResult::new("", "automated invoice processing", "https://example.org");
    assert_eq!(score(&result, "invoice"), 55);
}

#[test]
fn test_tokens_accumulate_across_both_fields() {
    let result = RawResult::new(
        "Invoice automation",
        "invoice automation for freelancers",
        "https://example.org",
    );
    // "invoice": title +10, description +5; "automation": title +10, description +5
    assert_eq!(score(&result, "invoice automation"), 80);
}

#[test]
fn test_saas_url_bonus_once() {
    let result = RawResult::new("", "", "https://app.getexample.com");
    // Two markers present ("app.", "get"), bonus applies once
    assert_eq!(score(&result, "nothing matches"), 65);
}

#[test]
fn test_product_term_bonus_once() {
    let result = RawResult::new("", "a platform and a tool and software", "https://example.org");
    assert_eq!(score(&result, "nothing matches"), 60);
}

#[test]
fn test_short_query_tokens_ignored() {
    let result = RawResult::new("AI ML hub", "AI ML hub", "https://example.org");
    // "ai" and "ml" are too short to score; only "hub" counts
    assert_eq!(score(&result, "ai ml hub"), 65);
}

#[test]
fn test_empty_everything() {
    let result = RawResult::new("", "", "");
    assert_eq!(score(&result, ""), 50);
}

proptest! {
    /// The score is always within [0, 100] no matter what the service
    /// or the query contains.
    #[test]
    fn score_always_in_range(
        title in ".{0,80}",
        description in ".{0,200}",
        url in ".{0,60}",
        query in "[a-z ]{0,60}",
    ) {
        let result = RawResult::new(title, description, url);
        let s = score(&result, &query);
        prop_assert!(s <= 100);
    }
}
