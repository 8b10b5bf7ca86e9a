//! HTTP fetcher implementation
//!
//! This module handles all network retrieval, including:
//! - Building the HTTP client with the configured user agent and timeout
//! - Cache-aside lookups around each GET
//! - Classifying failures into [`FetchError`] at the point they happen
//! - Extracting visible text from successful responses

use crate::config::FetcherConfig;
use crate::fetcher::{extract_text, FetchCache, FetchError};
use reqwest::{redirect::Policy, Client};
use std::error::Error as _;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Outcome of fetching one URL
///
/// Holds either the extracted text or the failure, never both and never
/// neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// The URL exactly as requested
    pub url: String,
    outcome: Result<String, FetchError>,
}

impl FetchResult {
    pub fn success(url: &str, text: String) -> Self {
        Self {
            url: url.to_string(),
            outcome: Ok(text),
        }
    }

    pub fn failure(url: &str, error: FetchError) -> Self {
        Self {
            url: url.to_string(),
            outcome: Err(error),
        }
    }

    /// Extracted text, if the fetch succeeded
    pub fn text(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    /// The failure, if the fetch failed
    pub fn error(&self) -> Option<&FetchError> {
        self.outcome.as_ref().err()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn into_outcome(self) -> Result<String, FetchError> {
        self.outcome
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Cache-aware page fetcher
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    cache: Arc<FetchCache>,
    timeout_secs: u64,
}

impl Fetcher {
    /// Creates a fetcher from an already built client
    ///
    /// `timeout_secs` must match the timeout the client was built with; it is
    /// only used to describe timeouts.
    pub fn new(client: Client, cache: Arc<FetchCache>, timeout_secs: u64) -> Self {
        Self {
            client,
            cache,
            timeout_secs,
        }
    }

    /// Builds the client from `config` and wraps it with `cache`
    pub fn from_config(config: &FetcherConfig, cache: Arc<FetchCache>) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        Ok(Self::new(client, cache, config.timeout_secs))
    }

    pub fn cache(&self) -> &Arc<FetchCache> {
        &self.cache
    }

    /// Fetches a URL and extracts its visible text
    ///
    /// # Request Flow
    ///
    /// 1. Return the cached outcome if a live one exists
    /// 2. Parse the URL; only `http` and `https` are retrieved
    /// 3. Send a GET (redirects followed, configured timeout)
    /// 4. Any non-2xx status is a failure
    /// 5. Extract visible text from the body
    /// 6. Cache the outcome, success or failure, and return it
    ///
    /// # Failure Mapping
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | Unparseable URL | InvalidUrl |
    /// | ftp/ftps or other scheme | UnsupportedScheme |
    /// | DNS lookup failed | NameResolution |
    /// | Timeout (connect, request, or body) | Timeout |
    /// | Connection refused/reset | Connect |
    /// | Non-2xx status | Status |
    /// | Body could not be read | Body |
    /// | Anything else | Request |
    ///
    /// Never returns an error to the caller; failures are part of the result.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        if let Some(cached) = self.cache.get(url) {
            tracing::debug!("Cache hit for URL: {}", url);
            return cached;
        }

        tracing::info!("Fetching URL: {}", url);
        let result = match self.retrieve(url).await {
            Ok(text) => {
                tracing::info!("Successfully fetched URL: {} ({} chars)", url, text.len());
                FetchResult::success(url, text)
            }
            Err(e) => {
                tracing::error!("Error fetching {}: {}", url, e);
                FetchResult::failure(url, e)
            }
        };

        self.cache.put(url, result.clone());
        result
    }

    async fn retrieve(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FetchError::UnsupportedScheme {
                url: url.to_string(),
                scheme: parsed.scheme().to_string(),
            });
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.classify_request_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    secs: self.timeout_secs,
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    reason: error_chain(&e),
                }
            }
        })?;

        Ok(extract_text(&body))
    }

    /// Maps a transport-level reqwest error onto a [`FetchError`]
    fn classify_request_error(&self, url: &str, e: &reqwest::Error) -> FetchError {
        let url = url.to_string();
        if e.is_timeout() {
            FetchError::Timeout {
                url,
                secs: self.timeout_secs,
            }
        } else if is_name_resolution(e) {
            FetchError::NameResolution {
                url,
                reason: error_chain(e),
            }
        } else if e.is_connect() {
            FetchError::Connect {
                url,
                reason: error_chain(e),
            }
        } else if e.is_builder() {
            FetchError::InvalidUrl {
                url,
                reason: error_chain(e),
            }
        } else {
            FetchError::Request {
                url,
                reason: error_chain(e),
            }
        }
    }
}

/// Markers the resolver puts in its error text
const RESOLUTION_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "no such host",
    "nodename nor servname",
];

fn is_name_resolution(e: &reqwest::Error) -> bool {
    let mut source = e.source();
    while let Some(inner) = source {
        let text = inner.to_string().to_ascii_lowercase();
        if RESOLUTION_MARKERS.iter().any(|marker| text.contains(marker)) {
            return true;
        }
        source = inner.source();
    }
    false
}

/// Renders an error and its sources as `outer: inner: root`
fn error_chain(e: &reqwest::Error) -> String {
    let mut parts = vec![e.to_string()];
    let mut source = e.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        source = inner.source();
    }
    parts.join(": ")
}
