use std::time::Duration;

use ctfwordgen::fetch::{ContextSource, FetchConfig, PageFetcher};
use ctfwordgen::WordgenError;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WIKI_PAGE: &str = r#"<html><body>
    <h1>Search results</h1>
    <p>Pwnable</p><p>the</p><p>Linux</p>
</body></html>"#;

const SEARCH_PAGE: &str = r#"<html><body>
    <div>Writeups</div><div>linux</div><div>Heap exploitation</div>
</body></html>"#;

fn test_config(server: &MockServer) -> FetchConfig {
    FetchConfig {
        timeout: Duration::from_secs(5),
        delay: Duration::ZERO,
        encyclopedia_endpoint: format!("{}/w/index.php", server.uri()),
        search_endpoint: format!("{}/search", server.uri()),
        ..FetchConfig::default()
    }
}

#[tokio::test]
async fn test_gather_concatenates_sources_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/index.php"))
        .and(query_param("search", "hack the box"))
        .respond_with(ResponseTemplate::new(200).set_body_string(WIKI_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Hack The Box CTF challenge"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_PAGE))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(test_config(&server)).unwrap();
    let raw = fetcher
        .gather(
            &[ContextSource::Encyclopedia, ContextSource::SearchEngine],
            "Hack The Box",
        )
        .await;

    assert_eq!(
        raw,
        vec![
            "Search results",
            "Pwnable",
            "Linux",
            "Writeups",
            "linux",
            "Heap exploitation"
        ]
    );
    assert_eq!(
        ctfwordgen::context::filter_words(&raw),
        vec!["pwnable", "linux", "writeups"]
    );
}

#[tokio::test]
async fn test_failed_source_contributes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/index.php"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_PAGE))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(test_config(&server)).unwrap();
    let raw = fetcher
        .gather(
            &[ContextSource::Encyclopedia, ContextSource::SearchEngine],
            "root",
        )
        .await;

    assert_eq!(raw, vec!["Writeups", "linux", "Heap exploitation"]);
}

#[tokio::test]
async fn test_non_ok_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(test_config(&server)).unwrap();
    let url = ContextSource::SearchEngine
        .search_url(&format!("{}/search", server.uri()), "root")
        .unwrap();

    match fetcher.fetch(&url).await {
        Err(WordgenError::Status { status, .. }) => assert_eq!(status, 204),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "ctf-tester/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>matched</p>"))
        .mount(&server)
        .await;

    let config = FetchConfig {
        user_agent: "ctf-tester/1.0".to_string(),
        ..test_config(&server)
    };
    let fetcher = PageFetcher::new(config).unwrap();
    let raw = fetcher.gather(&[ContextSource::SearchEngine], "root").await;

    assert_eq!(raw, vec!["matched"]);
}

#[tokio::test]
async fn test_unreachable_host_yields_empty_context() {
    let config = FetchConfig {
        timeout: Duration::from_millis(500),
        delay: Duration::ZERO,
        encyclopedia_endpoint: "http://127.0.0.1:9/w/index.php".to_string(),
        search_endpoint: "http://127.0.0.1:9/search".to_string(),
        ..FetchConfig::default()
    };
    let fetcher = PageFetcher::new(config).unwrap();
    let raw = fetcher
        .gather(
            &[ContextSource::Encyclopedia, ContextSource::SearchEngine],
            "root",
        )
        .await;

    assert!(raw.is_empty());
}
