//! Fetcher and cache behavior against a mock server

use crate::{html_page, test_cache, test_fetcher};
use page_lens::{classify, classify_failure, FetchError, Issue};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_extracts_visible_text() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Hello <b>bold</b> world"))
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5, test_cache(Duration::from_secs(60)));
    let url = format!("{}/article", mock_server.uri());
    let result = fetcher.fetch(&url).await;

    let text = result.text().expect("fetch should succeed");
    assert!(text.contains("Hello"));
    assert!(text.contains("bold"));
    assert!(text.contains("Test"));
    assert!(!text.contains("hidden"));
    assert_eq!(result.url, url);
}

#[tokio::test]
async fn test_cache_serves_repeat_fetch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("cached page")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cache = test_cache(Duration::from_secs(3600));
    let fetcher = test_fetcher(5, cache.clone());
    let url = format!("{}/", mock_server.uri());

    let first = fetcher.fetch(&url).await;
    let second = fetcher.fetch(&url).await;

    assert_eq!(first, second);
    assert_eq!(cache.stats().hits, 1);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_expired_entry_is_refetched() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("short lived")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5, test_cache(Duration::from_millis(200)));
    let url = format!("{}/", mock_server.uri());

    assert!(fetcher.fetch(&url).await.is_success());
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(fetcher.fetch(&url).await.is_success());

    mock_server.verify().await;
}

#[tokio::test]
async fn test_failure_is_cached() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5, test_cache(Duration::from_secs(3600)));
    let url = format!("{}/missing", mock_server.uri());

    let first = fetcher.fetch(&url).await;
    let second = fetcher.fetch(&url).await;

    assert!(matches!(
        first.error(),
        Some(FetchError::Status { status: 404, .. })
    ));
    assert_eq!(first, second);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_client_errors_are_classified() {
    let mock_server = MockServer::start().await;
    for (status, route) in [(401u16, "/private"), (403, "/forbidden"), (404, "/gone")] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;
    }

    let fetcher = test_fetcher(5, test_cache(Duration::from_secs(60)));
    let expected = [
        ("/private", Issue::HttpUnauthorized),
        ("/forbidden", Issue::HttpForbidden),
        ("/gone", Issue::HttpNotFound),
    ];

    for (route, issue) in expected {
        let url = format!("{}{}", mock_server.uri(), route);
        let result = fetcher.fetch(&url).await;
        let error = result.error().expect("fetch should fail");

        assert_eq!(classify_failure(&url, error).kind, issue);
        assert_eq!(classify(&url, &error.to_string()).kind, issue);
    }
}

#[tokio::test]
async fn test_server_error_is_unknown() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(5, test_cache(Duration::from_secs(60)));
    let url = format!("{}/", mock_server.uri());
    let result = fetcher.fetch(&url).await;
    let error = result.error().expect("fetch should fail");

    assert_eq!(classify_failure(&url, error).kind, Issue::UnknownFetchError);
    assert_eq!(classify(&url, &error.to_string()).kind, Issue::UnknownFetchError);
}

#[tokio::test]
async fn test_connection_refused() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let fetcher = test_fetcher(5, test_cache(Duration::from_secs(60)));
    let url = format!("http://127.0.0.1:{}/", port);
    let result = fetcher.fetch(&url).await;
    let error = result.error().expect("fetch should fail");

    assert!(matches!(error, FetchError::Connect { .. }), "got {:?}", error);
    assert_eq!(classify_failure(&url, error).kind, Issue::ConnectionTimeout);
    assert_eq!(classify(&url, &error.to_string()).kind, Issue::ConnectionTimeout);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher(1, test_cache(Duration::from_secs(60)));
    let url = format!("{}/", mock_server.uri());
    let result = fetcher.fetch(&url).await;
    let error = result.error().expect("fetch should time out");

    assert!(matches!(error, FetchError::Timeout { secs: 1, .. }), "got {:?}", error);
    assert_eq!(classify_failure(&url, error).kind, Issue::ConnectionTimeout);
}

#[tokio::test]
async fn test_unresolvable_host_is_name_resolution() {
    // The .invalid TLD is reserved and never resolves
    let fetcher = test_fetcher(5, test_cache(Duration::from_secs(60)));
    let url = "http://does-not-exist.invalid/";
    let result = fetcher.fetch(url).await;
    let error = result.error().expect("lookup should fail");

    assert!(
        matches!(error, FetchError::NameResolution { .. }),
        "got {:?}",
        error
    );
    assert_eq!(classify_failure(url, error).kind, Issue::NameResolutionFailure);
    assert_eq!(classify(url, &error.to_string()).kind, Issue::NameResolutionFailure);
}
