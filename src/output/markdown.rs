//! Markdown report generation
//!
//! Renders an [`AnalysisResponse`] as headed Markdown tables. Word cloud
//! payloads are summarized by size instead of being inlined.

use crate::classify::ErrorReport;
use crate::pipeline::{AnalysisResponse, ComparisonReport};

/// Formats a response as a Markdown report
pub fn format_markdown_report(response: &AnalysisResponse) -> String {
    let mut md = String::new();

    md.push_str("# Page-Lens Report\n\n");
    md.push_str(&format!("- **Status**: {}\n", response.status_code()));

    match response {
        AnalysisResponse::Completed(report) => format_comparison(&mut md, report),
        AnalysisResponse::Rejected { invalid_urls } => {
            md.push_str(&format!("- **Rejected URLs**: {}\n\n", invalid_urls.len()));
            md.push_str("## Rejected URLs\n\n");
            format_issues(&mut md, invalid_urls);
        }
        AnalysisResponse::NoUrls | AnalysisResponse::Internal => {
            if let Some(message) = response.error_message() {
                md.push_str(&format!("- **Error**: {}\n", message));
            }
        }
    }

    md
}

fn format_comparison(md: &mut String, report: &ComparisonReport) {
    md.push_str(&format!("- **Documents Analyzed**: {}\n", report.len()));
    if !report.failed_urls.is_empty() {
        md.push_str(&format!("- **Failed URLs**: {}\n", report.failed_urls.len()));
    }
    md.push('\n');

    md.push_str("## Sentiment Comparison\n\n");
    md.push_str("| URL | Positive | Neutral | Negative |\n");
    md.push_str("|-----|----------|---------|----------|\n");
    for row in &report.sentiment_comparison {
        md.push_str(&format!(
            "| {} | {:.3} | {:.3} | {:.3} |\n",
            row.url, row.positive, row.neutral, row.negative
        ));
    }
    md.push('\n');

    md.push_str("## Readability Comparison\n\n");
    md.push_str("| URL | Flesch-Kincaid Grade |\n");
    md.push_str("|-----|----------------------|\n");
    for row in &report.readability_comparison {
        md.push_str(&format!("| {} | {:.1} |\n", row.url, row.readability));
    }
    md.push('\n');

    md.push_str("## Word Frequencies\n\n");
    for row in &report.word_frequencies {
        md.push_str(&format!("### {}\n\n", row.url));
        if row.words.is_empty() {
            md.push_str("No words found.\n\n");
            continue;
        }
        md.push_str("| Word | Count |\n");
        md.push_str("|------|-------|\n");
        for (word, count) in row.words.iter().zip(&row.counts) {
            md.push_str(&format!("| {} | {} |\n", escape_cell(word), count));
        }
        md.push('\n');
    }

    md.push_str("## Word Clouds\n\n");
    md.push_str("| URL | Image |\n");
    md.push_str("|-----|-------|\n");
    for row in &report.word_clouds {
        let image = match &row.word_cloud {
            Some(encoded) => format!("PNG, {} bytes base64", encoded.len()),
            None => "not available".to_string(),
        };
        md.push_str(&format!("| {} | {} |\n", row.url, image));
    }
    md.push('\n');

    if !report.failed_urls.is_empty() {
        md.push_str("## Failed URLs\n\n");
        format_issues(md, &report.failed_urls);
    }
}

fn format_issues(md: &mut String, reports: &[ErrorReport]) {
    md.push_str("| URL | Issue |\n");
    md.push_str("|-----|-------|\n");
    for report in reports {
        md.push_str(&format!(
            "| {} | {} |\n",
            escape_cell(&report.url),
            report.issue
        ));
    }
    md.push('\n');
}

/// Keeps user-supplied text from breaking table rows
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
