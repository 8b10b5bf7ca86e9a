//! Fetcher module for page retrieval
//!
//! This module contains everything between a URL and its extracted text:
//! - HTTP fetching with typed failure classification
//! - A TTL + LRU cache of fetch outcomes
//! - HTML to visible text extraction
//! - A bounded worker pool that fetches a batch in input order

mod cache;
mod client;
mod error;
mod extract;
mod pool;

pub use cache::{CacheEntry, CacheStats, FetchCache};
pub use client::{build_http_client, FetchResult, Fetcher};
pub use error::FetchError;
pub use extract::extract_text;
pub use pool::{FetchPool, DEFAULT_WORKERS};
