//! Error classification
//!
//! Maps raw failure text, or a typed [`FetchError`], onto a fixed taxonomy of
//! user-facing issues.
//!
//! # Precedence
//!
//! Raw messages are tested against an ordered list of substrings and the first
//! match wins:
//!
//! | Order | Substring | Issue |
//! |-------|-----------|-------|
//! | 1 | `Invalid URL` | InvalidUrlFormat |
//! | 2 | `NameResolutionError` | NameResolutionFailure |
//! | 3 | `403 Client Error` | HttpForbidden |
//! | 4 | `401 Client Error` | HttpUnauthorized |
//! | 5 | `404 Client Error` | HttpNotFound |
//! | 6 | `Max retries exceeded` | ConnectionTimeout |
//! | - | anything else | UnknownFetchError |
//!
//! A name-resolution failure is reported inside a "Max retries exceeded"
//! message, so the order matters.

use crate::fetcher::FetchError;
use serde::Serialize;

/// User-facing issue taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Issue {
    InvalidUrlFormat,
    NameResolutionFailure,
    HttpForbidden,
    HttpUnauthorized,
    HttpNotFound,
    ConnectionTimeout,
    UnknownFetchError,
    VisualizationFailure,
    UnexpectedPipelineError,
}

impl Issue {
    /// The fixed message shown to the caller
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidUrlFormat => "Invalid URL format. Please check the URL.",
            Self::NameResolutionFailure => {
                "Unable to resolve the domain. Please check the domain name."
            }
            Self::HttpForbidden => {
                "Access denied (403 Forbidden). This site may restrict scraping."
            }
            Self::HttpUnauthorized => {
                "Unauthorized access (401 Unauthorized). Authentication may be required."
            }
            Self::HttpNotFound => {
                "Page not found (404 Error). The requested page may have been removed or the URL may be incorrect."
            }
            Self::ConnectionTimeout => {
                "Connection timeout or server is unresponsive. Please try again later."
            }
            Self::UnknownFetchError => "An unexpected error occurred during scraping.",
            Self::VisualizationFailure => "Word cloud could not be generated.",
            Self::UnexpectedPipelineError => "An error occurred.",
        }
    }
}

/// Ordered substring tests applied to raw messages
const RAW_PATTERNS: &[(&str, Issue)] = &[
    ("Invalid URL", Issue::InvalidUrlFormat),
    ("NameResolutionError", Issue::NameResolutionFailure),
    ("403 Client Error", Issue::HttpForbidden),
    ("401 Client Error", Issue::HttpUnauthorized),
    ("404 Client Error", Issue::HttpNotFound),
    ("Max retries exceeded", Issue::ConnectionTimeout),
];

/// A classified failure for one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    #[serde(rename = "URL")]
    pub url: String,

    pub issue: String,

    #[serde(skip)]
    pub kind: Issue,
}

impl ErrorReport {
    /// Builds a report carrying the issue's fixed message
    pub fn new(url: &str, kind: Issue) -> Self {
        Self {
            url: url.to_string(),
            issue: kind.message().to_string(),
            kind,
        }
    }
}

/// Classifies a raw failure message
///
/// # Examples
///
/// ```
/// use page_lens::{classify, Issue};
///
/// let report = classify("http://example.com/x", "404 Client Error: Not Found");
/// assert_eq!(report.kind, Issue::HttpNotFound);
/// ```
pub fn classify(url: &str, raw_message: &str) -> ErrorReport {
    ErrorReport::new(url, classify_message(raw_message))
}

/// Classifies a typed fetch failure
///
/// Agrees with [`classify`] applied to the failure's display text, except
/// when the URL embedded in that text itself contains one of the raw
/// patterns. The typed variant decides in that case.
pub fn classify_failure(url: &str, error: &FetchError) -> ErrorReport {
    let kind = match error {
        FetchError::InvalidUrl { .. } => Issue::InvalidUrlFormat,
        FetchError::NameResolution { .. } => Issue::NameResolutionFailure,
        FetchError::Status { status: 403, .. } => Issue::HttpForbidden,
        FetchError::Status { status: 401, .. } => Issue::HttpUnauthorized,
        FetchError::Status { status: 404, .. } => Issue::HttpNotFound,
        FetchError::Timeout { .. } | FetchError::Connect { .. } => Issue::ConnectionTimeout,
        FetchError::Status { .. }
        | FetchError::UnsupportedScheme { .. }
        | FetchError::Body { .. }
        | FetchError::Request { .. }
        | FetchError::WorkerPanicked { .. } => Issue::UnknownFetchError,
    };
    ErrorReport::new(url, kind)
}

fn classify_message(raw_message: &str) -> Issue {
    RAW_PATTERNS
        .iter()
        .find(|(needle, _)| raw_message.contains(needle))
        .map(|(_, issue)| *issue)
        .unwrap_or(Issue::UnknownFetchError)
}
