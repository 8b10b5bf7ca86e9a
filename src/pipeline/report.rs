//! Response shapes returned by the pipeline

use crate::analysis::AnalysisResult;
use crate::classify::{ErrorReport, Issue};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Sentiment proportions for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentRow {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Positive")]
    pub positive: f64,
    #[serde(rename = "Neutral")]
    pub neutral: f64,
    #[serde(rename = "Negative")]
    pub negative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityRow {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Readability")]
    pub readability: f64,
}

/// Top words and their counts, as parallel lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordFrequencyRow {
    #[serde(rename = "URL")]
    pub url: String,
    pub words: Vec<String>,
    pub counts: Vec<usize>,
}

/// Base64 PNG for one document, `null` when not rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloudRow {
    #[serde(rename = "URL")]
    pub url: String,
    pub word_cloud: Option<String>,
}

/// Side-by-side comparison of every analyzed document
///
/// Rows are labelled `"URL n"`, where `n` is the 1-based position of the URL
/// in the submitted batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub sentiment_comparison: Vec<SentimentRow>,
    pub readability_comparison: Vec<ReadabilityRow>,
    pub word_frequencies: Vec<WordFrequencyRow>,
    pub word_clouds: Vec<WordCloudRow>,
    /// Only populated when partial batches are allowed
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_urls: Vec<ErrorReport>,
}

impl ComparisonReport {
    /// Adds every row for the document at batch position `index`
    pub fn push(&mut self, index: usize, analysis: &AnalysisResult, word_cloud: Option<String>) {
        let label = position_label(index);

        self.sentiment_comparison.push(SentimentRow {
            url: label.clone(),
            positive: analysis.sentiment.pos,
            neutral: analysis.sentiment.neu,
            negative: analysis.sentiment.neg,
        });
        self.readability_comparison.push(ReadabilityRow {
            url: label.clone(),
            readability: analysis.readability,
        });
        self.word_frequencies.push(WordFrequencyRow {
            url: label.clone(),
            words: analysis.word_count.iter().map(|w| w.word.clone()).collect(),
            counts: analysis.word_count.iter().map(|w| w.count).collect(),
        });
        self.word_clouds.push(WordCloudRow {
            url: label,
            word_cloud,
        });
    }

    /// Number of analyzed documents
    pub fn len(&self) -> usize {
        self.sentiment_comparison.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentiment_comparison.is_empty()
    }
}

/// `"URL n"` for the 0-based batch position `index`
pub fn position_label(index: usize) -> String {
    format!("URL {}", index + 1)
}

/// What the caller gets back for one batch
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResponse {
    /// The batch was empty
    NoUrls,
    /// At least one URL was invalid or could not be fetched
    Rejected { invalid_urls: Vec<ErrorReport> },
    Completed(ComparisonReport),
    /// The pipeline itself failed
    Internal,
}

impl AnalysisResponse {
    /// HTTP-style status for this response
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Completed(_) => 200,
            Self::NoUrls | Self::Rejected { .. } => 400,
            Self::Internal => 500,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Top-level error message, for responses that carry one
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::NoUrls => Some("No URLs provided."),
            Self::Internal => Some(Issue::UnexpectedPipelineError.message()),
            Self::Rejected { .. } | Self::Completed(_) => None,
        }
    }
}

impl Serialize for AnalysisResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Completed(report) => report.serialize(serializer),
            Self::Rejected { invalid_urls } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("invalid_urls", invalid_urls)?;
                map.end()
            }
            Self::NoUrls | Self::Internal => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", &self.error_message())?;
                map.end()
            }
        }
    }
}
