//! URL syntax validation for Page-Lens
//!
//! Every URL in a batch is checked against a fixed grammar before any network
//! access happens. The check is purely syntactic.

use crate::classify::{ErrorReport, Issue};
use regex::Regex;

/// Grammar accepted for batch URLs
///
/// - scheme: `http`, `https`, `ftp`, `ftps`
/// - host: domain name, `localhost`, IPv4 literal, or (bracketed) IPv6 literal
/// - optional `:port`
/// - optional path and/or query
const URL_PATTERN: &str = concat!(
    r"(?i)^(?:http|ftp)s?://",
    r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|",
    r"localhost|",
    r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}|",
    r"\[?[A-F0-9]*:[A-F0-9:]+\]?)",
    r"(?::\d+)?",
    r"(?:/?|[/?]\S+)$",
);

/// Syntactic URL validator
///
/// Compile once and share; matching is lock-free.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    pattern: Regex,
}

impl UrlValidator {
    /// Compiles the URL grammar
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(URL_PATTERN)?,
        })
    }

    /// Returns true if `url` matches the accepted grammar
    ///
    /// # Examples
    ///
    /// ```
    /// use page_lens::UrlValidator;
    ///
    /// let validator = UrlValidator::new().unwrap();
    /// assert!(validator.is_valid("https://example.com/page?q=1"));
    /// assert!(!validator.is_valid("not a url"));
    /// ```
    pub fn is_valid(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    /// Checks every URL of a batch
    ///
    /// Returns one [`ErrorReport`] per invalid URL, in input order. The result
    /// is empty iff every URL is valid.
    pub fn validate_batch<S: AsRef<str>>(&self, urls: &[S]) -> Vec<ErrorReport> {
        urls.iter()
            .map(AsRef::as_ref)
            .filter(|url| !self.is_valid(url))
            .map(|url| ErrorReport::new(url, Issue::InvalidUrlFormat))
            .collect()
    }
}
