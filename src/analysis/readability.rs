//! Flesch-Kincaid grade level
//!
//! `grade = 0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`
//!
//! Syllables are estimated by counting vowel groups, so the score is an
//! approximation in the same way dictionary-free readability tools are.

/// Computes the Flesch-Kincaid grade of `text`
///
/// Rounded to one decimal and never negative. Text without words scores 0.
///
/// # Example
///
/// ```
/// use page_lens::analysis::flesch_kincaid_grade;
///
/// let grade = flesch_kincaid_grade("This is a sample text. It is positive and wonderful.");
/// assert!((grade - 4.1).abs() < 1e-9);
/// ```
pub fn flesch_kincaid_grade(text: &str) -> f64 {
    let words: Vec<&str> = words(text).collect();
    if words.is_empty() {
        return 0.0;
    }

    let word_count = words.len() as f64;
    let sentence_count = sentence_count(text).max(1) as f64;
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    let grade = 0.39 * (word_count / sentence_count)
        + 11.8 * (syllable_count as f64 / word_count)
        - 15.59;

    (grade.max(0.0) * 10.0).round() / 10.0
}

/// Words are runs of letters, digits and apostrophes containing a letter
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| w.chars().any(char::is_alphabetic))
}

/// Sentences are segments ending in `.`, `!` or `?` that contain a word
fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphabetic))
        .count()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimates the syllables of one word; at least one
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if letters.len() <= 3 {
        return 1;
    }

    let mut count = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    // Silent trailing "e" (but "-le" after a consonant is its own syllable)
    let n = letters.len();
    if letters[n - 1] == 'e' && count > 1 {
        let consonant_le = letters[n - 2] == 'l' && !is_vowel(letters[n - 3]);
        if !consonant_le {
            count -= 1;
        }
    }

    // "-es"/"-ed" endings after most consonants are silent
    if count > 1 && (letters.ends_with(&['e', 'd']) || letters.ends_with(&['e', 's'])) {
        let before = letters[n - 3];
        if !is_vowel(before) && !matches!(before, 't' | 'd' | 's' | 'z' | 'x' | 'c' | 'g') {
            count -= 1;
        }
    }

    count.max(1)
}
