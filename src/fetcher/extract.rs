//! HTML to visible text extraction
//!
//! Markup is dropped and every remaining text node is trimmed; empty nodes are
//! skipped and the rest are joined with single spaces. Contents of elements
//! that never render as text are ignored:
//!
//! - `<script>`
//! - `<style>`
//! - `<noscript>`
//! - `<template>`

use scraper::Html;

/// Elements whose text content is not visible
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracts the visible text of an HTML document
///
/// # Example
///
/// ```
/// use page_lens::fetcher::extract_text;
///
/// let html = r#"<html><head><title>Hi</title><script>var x;</script></head>
///               <body><p> Hello   </p><p>world</p></body></html>"#;
/// assert_eq!(extract_text(html), "Hi Hello world");
/// ```
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut pieces = Vec::new();

    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        let piece = text.trim();
        if !piece.is_empty() {
            pieces.push(piece);
        }
    }

    pieces.join(" ")
}
