//! Integration tests for Page-Lens
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! fetcher, the worker pool, and the full pipeline end-to-end.

mod fetch_tests;
mod pipeline_tests;
mod pool_tests;

use page_lens::config::FetcherConfig;
use page_lens::{FetchCache, Fetcher};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

/// Fetcher config with a short timeout for tests
pub fn test_fetcher_config(timeout_secs: u64) -> FetcherConfig {
    FetcherConfig {
        timeout_secs,
        workers: 10,
        user_agent: "TestLens/1.0".to_string(),
        max_redirects: 5,
    }
}

pub fn test_cache(ttl: Duration) -> Arc<FetchCache> {
    Arc::new(FetchCache::new(NonZeroUsize::new(100).unwrap(), ttl))
}

pub fn test_fetcher(timeout_secs: u64, cache: Arc<FetchCache>) -> Fetcher {
    Fetcher::from_config(&test_fetcher_config(timeout_secs), cache)
        .expect("Failed to build fetcher")
}

/// Wraps `body` in a minimal HTML document
pub fn html_page(body: &str) -> String {
    format!(
        "<html><head><title>Test</title><script>var hidden = 1;</script></head>\
         <body><p>{}</p></body></html>",
        body
    )
}
