//! End-to-end batch analysis through the pipeline

use crate::html_page;
use page_lens::config::{load_config, Config};
use page_lens::{AnalysisResponse, Issue, Pipeline};
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_TEXT: &str = "This is a sample text. It is positive and wonderful.";

fn test_pipeline() -> Pipeline {
    let mut config = Config::default();
    config.fetcher.timeout_secs = 5;
    Pipeline::new(config).expect("Failed to build pipeline")
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page(body))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_url_success_shape() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sample"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<html><body><p>{}</p></body></html>",
            SAMPLE_TEXT
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/sample", mock_server.uri());
    let response = test_pipeline().respond(&[url]).await;
    assert_eq!(response.status_code(), 200);

    let report = match &response {
        AnalysisResponse::Completed(report) => report,
        other => panic!("expected completed report, got {:?}", other),
    };
    assert_eq!(report.len(), 1);
    assert_eq!(report.sentiment_comparison[0].url, "URL 1");
    assert!(report.sentiment_comparison[0].positive > 0.0);
    assert!((report.readability_comparison[0].readability - 4.1).abs() < 1e-9);
    assert_eq!(report.word_frequencies[0].words[0], "is");
    assert_eq!(report.word_frequencies[0].counts[0], 2);
    assert!(report.word_clouds[0].word_cloud.is_some());
    assert!(report.failed_urls.is_empty());

    let json = serde_json::to_value(&response).unwrap();
    for key in [
        "sentiment_comparison",
        "readability_comparison",
        "word_frequencies",
        "word_clouds",
    ] {
        assert!(json[key].is_array(), "missing {}", key);
    }
    let row = &json["sentiment_comparison"][0];
    let total = ["Positive", "Neutral", "Negative"]
        .iter()
        .map(|key| row[*key].as_f64().unwrap())
        .sum::<f64>();
    assert!((total - 1.0).abs() < 0.01);

    mock_server.verify().await;
}

#[tokio::test]
async fn test_empty_batch_fetches_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let urls: Vec<String> = Vec::new();
    let response = test_pipeline().respond(&urls).await;

    assert_eq!(response, AnalysisResponse::NoUrls);
    assert_eq!(
        serde_json::to_value(&response).unwrap()["error"],
        "No URLs provided."
    );
    mock_server.verify().await;
}

#[tokio::test]
async fn test_invalid_url_rejects_batch_before_fetching() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(SAMPLE_TEXT)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let urls = vec![format!("{}/", mock_server.uri()), "not a url".to_string()];
    let response = test_pipeline().respond(&urls).await;

    match &response {
        AnalysisResponse::Rejected { invalid_urls } => {
            assert_eq!(invalid_urls.len(), 1);
            assert_eq!(invalid_urls[0].url, "not a url");
            assert_eq!(invalid_urls[0].kind, Issue::InvalidUrlFormat);
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert_eq!(response.status_code(), 400);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_fetch_failure_rejects_batch_after_fetching_all() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(SAMPLE_TEXT)))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gone = format!("{}/gone", mock_server.uri());
    let urls = vec![format!("{}/ok", mock_server.uri()), gone.clone()];
    let response = test_pipeline().respond(&urls).await;

    match &response {
        AnalysisResponse::Rejected { invalid_urls } => {
            assert_eq!(invalid_urls.len(), 1);
            assert_eq!(invalid_urls[0].url, gone);
            assert_eq!(invalid_urls[0].kind, Issue::HttpNotFound);
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    mock_server.verify().await;
}

#[tokio::test]
async fn test_partial_batch_keeps_positional_labels() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/first", "I love this wonderful place").await;
    mount_page(&mock_server, "/third", "I hate this terrible place").await;
    Mock::given(method("GET"))
        .and(path("/second"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let urls: Vec<String> = ["/first", "/second", "/third"]
        .iter()
        .map(|route| format!("{}{}", mock_server.uri(), route))
        .collect();
    let pipeline = test_pipeline()
        .with_reject_on_fetch_failure(false)
        .with_word_clouds(false);
    let response = pipeline.respond(&urls).await;

    let report = match &response {
        AnalysisResponse::Completed(report) => report,
        other => panic!("expected completed report, got {:?}", other),
    };
    let labels: Vec<&str> = report
        .sentiment_comparison
        .iter()
        .map(|row| row.url.as_str())
        .collect();
    assert_eq!(labels, vec!["URL 1", "URL 3"]);
    assert!(report.sentiment_comparison[0].positive > report.sentiment_comparison[0].negative);
    assert!(report.sentiment_comparison[1].negative > report.sentiment_comparison[1].positive);
    assert!(report.word_clouds.iter().all(|row| row.word_cloud.is_none()));

    assert_eq!(report.failed_urls.len(), 1);
    assert_eq!(report.failed_urls[0].url, urls[1]);
    assert_eq!(report.failed_urls[0].kind, Issue::HttpForbidden);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["failed_urls"][0]["URL"], urls[1].as_str());
}

#[tokio::test]
async fn test_repeat_batch_is_served_from_cache() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(SAMPLE_TEXT)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = test_pipeline();
    let urls = vec![format!("{}/", mock_server.uri())];

    let first = pipeline.respond(&urls).await;
    let second = pipeline.respond(&urls).await;

    assert_eq!(first, second);
    assert_eq!(pipeline.cache().len(), 1);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_config_file_disables_word_clouds() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", SAMPLE_TEXT).await;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[fetcher]
timeout-secs = 5
workers = 2

[analysis]
top-words = 3

[render]
enabled = false
"#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    let pipeline = Pipeline::new(config).unwrap();
    let response = pipeline.respond(&[format!("{}/", mock_server.uri())]).await;

    let report = match &response {
        AnalysisResponse::Completed(report) => report,
        other => panic!("expected completed report, got {:?}", other),
    };
    assert_eq!(report.word_frequencies[0].words.len(), 3);
    assert!(report.word_clouds[0].word_cloud.is_none());
}
