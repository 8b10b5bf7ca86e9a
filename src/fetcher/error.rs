use thiserror::Error;

/// Why a single fetch failed
///
/// Classified at the point of failure. The display text reads like the
/// messages HTTP clients commonly produce, so it also classifies correctly
/// through the substring rules in [`crate::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("No connection adapter for scheme '{scheme}' in {url}")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("Max retries exceeded with url: {url} (NameResolutionError: {reason})")]
    NameResolution { url: String, reason: String },

    #[error("{status} {} Error: {reason} for url: {url}", status_class(.status))]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Max retries exceeded with url: {url} (timed out after {secs}s)")]
    Timeout { url: String, secs: u64 },

    #[error("Max retries exceeded with url: {url} (connection failed: {reason})")]
    Connect { url: String, reason: String },

    #[error("Failed to read response body from {url}: {reason}")]
    Body { url: String, reason: String },

    #[error("Request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("Unexpected result format for {url}: fetch worker terminated abnormally")]
    WorkerPanicked { url: String },
}

fn status_class(status: &u16) -> &'static str {
    match *status {
        400..=499 => "Client",
        500..=599 => "Server",
        _ => "HTTP",
    }
}
