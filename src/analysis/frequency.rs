//! Word frequency counting

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// Word token pattern: maximal runs of word characters
pub const WORD_PATTERN: &str = r"\b\w+\b";

/// One entry of a frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Counts lower-cased words and returns the `limit` most frequent
///
/// Sorted by count descending. Equal counts keep the order in which the words
/// first appear in `text`.
pub fn top_words(pattern: &Regex, text: &str, limit: usize) -> Vec<WordCount> {
    let lowered = text.to_lowercase();

    // word -> (count, first occurrence)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in pattern.find_iter(&lowered).enumerate() {
        counts
            .entry(token.as_str())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, position));
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, count, _)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> Regex {
        Regex::new(WORD_PATTERN).unwrap()
    }

    fn pairs(words: &[WordCount]) -> Vec<(&str, usize)> {
        words.iter().map(|w| (w.word.as_str(), w.count)).collect()
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let words = top_words(&pattern(), "a a b b c", 20);
        assert_eq!(pairs(&words), vec![("a", 2), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_tie_order_follows_text_not_alphabet() {
        let words = top_words(&pattern(), "zebra apple zebra apple", 20);
        assert_eq!(pairs(&words), vec![("zebra", 2), ("apple", 2)]);
    }

    #[test]
    fn test_sorted_by_count_descending() {
        let words = top_words(&pattern(), "one two two three three three", 20);
        assert_eq!(pairs(&words), vec![("three", 3), ("two", 2), ("one", 1)]);
    }

    #[test]
    fn test_lowercases_tokens() {
        let words = top_words(&pattern(), "Rust rust RUST", 20);
        assert_eq!(pairs(&words), vec![("rust", 3)]);
    }

    #[test]
    fn test_punctuation_splits_words() {
        let words = top_words(&pattern(), "hello, world! hello-world", 20);
        assert_eq!(pairs(&words), vec![("hello", 2), ("world", 2)]);
    }

    #[test]
    fn test_limit_is_respected() {
        let text: String = (0..50).map(|i| format!("word{} ", i)).collect();
        let words = top_words(&pattern(), &text, 20);
        assert_eq!(words.len(), 20);
        assert_eq!(words[0].word, "word0");
        assert_eq!(words[19].word, "word19");
    }

    #[test]
    fn test_numbers_and_underscores_are_words() {
        let words = top_words(&pattern(), "2024 snake_case 2024", 20);
        assert_eq!(pairs(&words), vec![("2024", 2), ("snake_case", 1)]);
    }

    #[test]
    fn test_empty_text() {
        assert!(top_words(&pattern(), "", 20).is_empty());
        assert!(top_words(&pattern(), "... !!!", 20).is_empty());
    }
}
