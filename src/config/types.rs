use serde::Deserialize;

/// Main configuration structure for Page-Lens
///
/// Every section has defaults, so an empty file (or no file at all) yields
/// the stock behavior: 10 workers, 10 s timeout, one-hour cache of 1000
/// entries, top 20 words, 800x400 word clouds, strict batch rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub cache: CacheConfig,
    pub analysis: AnalysisConfig,
    pub render: RenderConfig,
    pub report: ReportConfig,
}

/// HTTP fetching behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Size of the worker pool used for one batch
    pub workers: usize,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Maximum number of redirects to follow
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            workers: 10,
            user_agent: format!("page-lens/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 10,
        }
    }
}

/// Fetch cache sizing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Time-to-live of a cached fetch outcome (seconds)
    #[serde(rename = "ttl-secs")]
    pub ttl_secs: u64,

    /// Maximum number of live entries
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 3600,
            capacity: 1000,
        }
    }
}

/// Text analysis settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of most frequent words kept per document
    #[serde(rename = "top-words")]
    pub top_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { top_words: 20 }
    }
}

/// Word cloud rendering settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Whether word clouds are produced at all
    pub enabled: bool,

    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 800,
            height: 400,
        }
    }
}

/// Response shaping policy
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Reject the whole batch when any single fetch failed
    #[serde(rename = "reject-on-fetch-failure")]
    pub reject_on_fetch_failure: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reject_on_fetch_failure: true,
        }
    }
}
