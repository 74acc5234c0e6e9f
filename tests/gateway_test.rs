//! Integration tests for the search gateway against a mock HTTP server.
//!
//! The gateway's contract is that every failure mode collapses to `None`;
//! these tests drive each mode through a real HTTP round trip.

mod common;

use competitor_scout::{DiscoveryConfig, SearchGateway};
use mockito::Matcher;

fn config_for(server: &mockito::ServerGuard) -> DiscoveryConfig {
    DiscoveryConfig::builder()
        .api_key(Some("test-key".into()))
        .endpoint(format!("{}/res/v1/web/search", server.url()))
        .build()
}

const RESPONSE_BODY: &str = r#"{
    "web": {
        "results": [
            {
                "title": "Quizlet - Study with flashcards",
                "description": "Learning platform",
                "url": "https://quizlet.com"
            },
            {
                "title": "StudyBlue",
                "description": "Flashcard app",
                "url": "https://studyblue.com"
            }
        ]
    }
}"#;

#[tokio::test]
async fn test_successful_search_parses_nested_results() {
    common::init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/res/v1/web/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "study flashcards".into()),
            Matcher::UrlEncoded("count".into(), "10".into()),
        ]))
        .match_header("X-Subscription-Token", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RESPONSE_BODY)
        .create_async()
        .await;

    let gateway = SearchGateway::new(config_for(&server));
    let results = gateway.search("study flashcards").await;

    mock.assert_async().await;
    let results = results.expect("successful response should yield results");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Quizlet - Study with flashcards");
    assert_eq!(results[1].url, "https://studyblue.com");
}

#[tokio::test]
async fn test_missing_credential_skips_network_entirely() {
    common::init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = DiscoveryConfig::builder()
        .api_key(None)
        .endpoint(format!("{}/res/v1/web/search", server.url()))
        .build();
    let gateway = SearchGateway::new(config);

    assert!(gateway.search("anything").await.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rate_limit_returns_none_without_retry() {
    common::init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/res/v1/web/search")
        .match_query(Matcher::Any)
        .with_status(429)
        .expect(1)
        .create_async()
        .await;

    let gateway = SearchGateway::new(config_for(&server));
    assert!(gateway.search("query").await.is_none());
    // Exactly one request: no retry at this layer
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_returns_none() {
    common::init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/res/v1/web/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let gateway = SearchGateway::new(config_for(&server));
    assert!(gateway.search("query").await.is_none());
}

#[tokio::test]
async fn test_unparseable_body_returns_none() {
    common::init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/res/v1/web/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let gateway = SearchGateway::new(config_for(&server));
    assert!(gateway.search("query").await.is_none());
}

#[tokio::test]
async fn test_missing_results_list_is_empty_not_error() {
    common::init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/res/v1/web/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let gateway = SearchGateway::new(config_for(&server));
    let results = gateway.search("query").await;
    assert_eq!(results, Some(vec![]));
}

#[tokio::test(start_paused = true)]
async fn test_zero_timeout_collapses_to_none() {
    common::init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/res/v1/web/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(RESPONSE_BODY)
        .create_async()
        .await;

    let config = DiscoveryConfig::builder()
        .api_key(Some("test-key".into()))
        .endpoint(format!("{}/res/v1/web/search", server.url()))
        .timeout_secs(0)
        .build();
    let gateway = SearchGateway::new(config);

    // The deadline elapses before any response can arrive
    assert!(gateway.search("query").await.is_none());
}
