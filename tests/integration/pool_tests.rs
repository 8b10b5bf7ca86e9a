//! Worker pool ordering and concurrency bound

use crate::{html_page, test_cache, test_fetcher};
use page_lens::fetcher::{FetchPool, DEFAULT_WORKERS};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_results_keep_input_order_under_interleaving() {
    let mock_server = MockServer::start().await;
    for (route, delay_ms, body) in [
        ("/slow", 400, "slowest page"),
        ("/fast", 0, "fastest page"),
        ("/medium", 150, "middle page"),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(html_page(body))
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .mount(&mock_server)
            .await;
    }

    let pool = FetchPool::new(test_fetcher(5, test_cache(Duration::from_secs(60))), 3);
    let urls: Vec<String> = ["/slow", "/fast", "/medium"]
        .iter()
        .map(|route| format!("{}{}", mock_server.uri(), route))
        .collect();

    let results = pool.fetch_all(&urls).await;

    assert_eq!(results.len(), 3);
    for (url, result) in urls.iter().zip(&results) {
        assert_eq!(&result.url, url);
    }
    assert!(results[0].text().unwrap().contains("slowest"));
    assert!(results[1].text().unwrap().contains("fastest"));
    assert!(results[2].text().unwrap().contains("middle"));
}

#[tokio::test]
async fn test_pool_never_exceeds_worker_bound() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/page/\d+$"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("numbered page"))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&mock_server)
        .await;

    let pool = FetchPool::new(
        test_fetcher(10, test_cache(Duration::from_secs(60))),
        DEFAULT_WORKERS,
    );
    let urls: Vec<String> = (0..20)
        .map(|i| format!("{}/page/{}", mock_server.uri(), i))
        .collect();

    let started = Instant::now();
    let results = pool.fetch_all(&urls).await;
    let elapsed = started.elapsed();

    assert!(results.iter().all(|r| r.is_success()));
    // Two waves of ten
    assert!(elapsed >= Duration::from_millis(400), "took {:?}", elapsed);
    // Still concurrent, not twenty sequential fetches
    assert!(elapsed < Duration::from_millis(3000), "took {:?}", elapsed);
}

#[tokio::test]
async fn test_one_failure_does_not_cancel_siblings() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("fine")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let pool = FetchPool::new(test_fetcher(5, test_cache(Duration::from_secs(60))), 2);
    let urls = vec![
        format!("{}/broken", mock_server.uri()),
        format!("{}/ok", mock_server.uri()),
    ];

    let results = pool.fetch_all(&urls).await;

    assert!(!results[0].is_success());
    assert!(results[1].is_success());
}
