//! Report output
//!
//! This module handles:
//! - Serializing responses as JSON
//! - Formatting responses as Markdown
//! - Writing reports to disk

mod markdown;

pub use markdown::format_markdown_report;

use crate::pipeline::AnalysisResponse;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Serializes a response as pretty-printed JSON
pub fn to_json(response: &AnalysisResponse) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(response)
}

/// Writes a formatted report to `output_path`
///
/// # Arguments
///
/// * `report` - The formatted report text
/// * `output_path` - Path where the report should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(std::io::Error)` - Failed to create or write the file
pub fn write_report(report: &str, output_path: &Path) -> std::io::Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(report.as_bytes())?;
    if !report.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    Ok(())
}
