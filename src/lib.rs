//! Page-Lens: cross-document text analytics for a batch of URLs
//!
//! This crate fetches a batch of pages concurrently, extracts their readable
//! text, and compares them by word frequency, sentiment, and readability,
//! optionally rendering a word cloud per document.

pub mod analysis;
pub mod classify;
pub mod config;
pub mod fetcher;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod url;

use thiserror::Error;

/// Main error type for Page-Lens operations
///
/// Fetch and validation failures never show up here: they are carried as
/// data inside [`fetcher::FetchResult`] and [`classify::ErrorReport`].
#[derive(Debug, Error)]
pub enum LensError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid URL pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Page-Lens operations
pub type Result<T> = std::result::Result<T, LensError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analysis::{AnalysisResult, SentimentScores, TextAnalyzer, WordCount};
pub use classify::{classify, classify_failure, ErrorReport, Issue};
pub use config::Config;
pub use fetcher::{FetchCache, FetchError, FetchPool, FetchResult, Fetcher};
pub use pipeline::{AnalysisResponse, ComparisonReport, Pipeline};
pub use render::WordCloudRenderer;
pub use crate::url::UrlValidator;
