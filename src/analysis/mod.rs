//! Text analytics for extracted documents
//!
//! This module computes, per document:
//! - The most frequent words (count descending, ties by first occurrence)
//! - Lexicon-based sentiment scores
//! - A Flesch-Kincaid readability grade

mod frequency;
mod lexicon;
mod readability;
mod sentiment;

pub use frequency::{top_words, WordCount, WORD_PATTERN};
pub use readability::{count_syllables, flesch_kincaid_grade};
pub use sentiment::{SentimentAnalyzer, SentimentScores};

use regex::Regex;
use serde::Serialize;

/// Default number of words kept in a frequency table
pub const DEFAULT_TOP_WORDS: usize = 20;

/// Analysis of one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Most frequent words, count descending
    pub word_count: Vec<WordCount>,
    pub sentiment: SentimentScores,
    /// Flesch-Kincaid grade, never negative
    pub readability: f64,
}

/// Shared, read-only analyzer
///
/// Holds the compiled tokenizer and the sentiment lexicon. Build it once and
/// reuse it for every document.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    word_pattern: Regex,
    sentiment: SentimentAnalyzer,
    top_words: usize,
}

impl TextAnalyzer {
    /// Creates an analyzer keeping `top_words` entries per frequency table
    pub fn new(top_words: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            word_pattern: Regex::new(WORD_PATTERN)?,
            sentiment: SentimentAnalyzer::new(),
            top_words,
        })
    }

    /// Analyzes one document
    ///
    /// # Example
    ///
    /// ```
    /// use page_lens::TextAnalyzer;
    ///
    /// let analyzer = TextAnalyzer::new(20).unwrap();
    /// let result = analyzer.analyze("a a b b c");
    /// assert_eq!(result.word_count[0].word, "a");
    /// assert_eq!(result.word_count[1].word, "b");
    /// ```
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        AnalysisResult {
            word_count: top_words(&self.word_pattern, text, self.top_words),
            sentiment: self.sentiment.polarity_scores(text),
            readability: flesch_kincaid_grade(text),
        }
    }

    /// Analyzes documents sequentially, preserving order
    pub fn analyze_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        texts.iter().map(|text| self.analyze(text.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> TextAnalyzer {
        TextAnalyzer::new(DEFAULT_TOP_WORDS).unwrap()
    }

    #[test]
    fn test_analyze_sample_text() {
        let result = analyzer().analyze("This is a sample text. It is positive and wonderful.");

        assert_eq!(result.word_count[0].word, "is");
        assert_eq!(result.word_count[0].count, 2);
        assert!(result.sentiment.pos > 0.0);
        assert!(result.readability >= 0.0);
    }

    #[test]
    fn test_word_count_limit() {
        let analyzer = TextAnalyzer::new(3).unwrap();
        let result = analyzer.analyze("one two three four five six");
        assert_eq!(result.word_count.len(), 3);
    }

    #[test]
    fn test_word_count_sorted_descending() {
        let text = "x y y z z z w w w w";
        let result = analyzer().analyze(text);
        let counts: Vec<usize> = result.word_count.iter().map(|w| w.count).collect();
        let mut sorted = counts.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(counts, sorted);
    }

    #[test]
    fn test_analyze_all_preserves_order() {
        let texts = vec![
            "I love this wonderful place".to_string(),
            "I hate this terrible place".to_string(),
            "plain words only".to_string(),
        ];
        let results = analyzer().analyze_all(&texts);

        assert_eq!(results.len(), 3);
        assert!(results[0].sentiment.compound > 0.0);
        assert!(results[1].sentiment.compound < 0.0);
        assert_eq!(results[2].sentiment.compound, 0.0);
    }

    #[test]
    fn test_analyze_empty_text() {
        let result = analyzer().analyze("");
        assert!(result.word_count.is_empty());
        assert_eq!(result.sentiment, SentimentScores::neutral());
        assert_eq!(result.readability, 0.0);
    }

    #[test]
    fn test_serializes_expected_keys() {
        let result = analyzer().analyze("good good day");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["word_count"][0]["word"], "good");
        assert_eq!(json["word_count"][0]["count"], 2);
        for key in ["pos", "neu", "neg", "compound"] {
            assert!(json["sentiment"][key].is_number());
        }
        assert!(json["readability"].is_number());
    }
}
