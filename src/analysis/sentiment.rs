//! Lexicon-based sentiment scoring
//!
//! A rule-based polarity model in the style of VADER. Each token found in the
//! lexicon contributes its valence, adjusted by the rules below. The summed
//! valence is squashed into `compound`, and the per-token valences are split
//! into positive/neutral/negative proportions.
//!
//! # Rules
//!
//! | Rule | Effect |
//! |------|--------|
//! | Booster within 3 tokens before | +0.293 magnitude (x0.95 at 2, x0.9 at 3) |
//! | Dampener within 3 tokens before | -0.293 magnitude (same decay) |
//! | ALL-CAPS word in mixed-case text | +0.733 magnitude |
//! | Negation within 3 tokens before | valence x -0.74 |
//! | "but" | before x0.5, after x1.5 |
//! | `!` (up to 4) | +0.292 each |
//! | `?` (more than 1) | +0.18 each, capped at 0.96 |

use crate::analysis::lexicon::{BOOSTERS, DAMPENERS, NEGATIONS, VALENCES};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

const BOOSTER_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
const NORMALIZATION_ALPHA: f64 = 15.0;
const LOOKBACK: usize = 3;

/// Polarity scores for one text
///
/// `pos`, `neu` and `neg` are proportions that sum to 1; `compound` is the
/// normalized overall valence in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScores {
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// Scores for a text with no sentiment-bearing content
    pub fn neutral() -> Self {
        Self {
            pos: 0.0,
            neu: 1.0,
            neg: 0.0,
            compound: 0.0,
        }
    }
}

struct Token<'a> {
    raw: &'a str,
    lower: String,
}

/// Read-only sentiment model, built once and shared
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
    boosters: HashSet<&'static str>,
    dampeners: HashSet<&'static str>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Loads the built-in lexicon
    pub fn new() -> Self {
        Self {
            lexicon: VALENCES.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            dampeners: DAMPENERS.iter().copied().collect(),
        }
    }

    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }

    /// Scores `text`
    ///
    /// Stateless: the result depends only on `text` and the lexicon.
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScores::neutral();
        }

        let mixed_case = is_mixed_case(&tokens);
        let mut valences: Vec<f64> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| self.token_valence(&tokens, i, token, mixed_case))
            .collect();

        apply_but_rule(&tokens, &mut valences);
        score_valences(&valences, punctuation_emphasis(text))
    }

    fn token_valence(&self, tokens: &[Token<'_>], i: usize, token: &Token<'_>, mixed_case: bool) -> f64 {
        let Some(&base) = self.lexicon.get(token.lower.as_str()) else {
            return 0.0;
        };

        let mut valence = base;
        if mixed_case && is_all_caps(token.raw) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for distance in 1..=LOOKBACK.min(i) {
            let previous = &tokens[i - distance];
            if self.lexicon.contains_key(previous.lower.as_str()) {
                continue;
            }
            let mut scalar = self.modifier_scalar(previous, valence, mixed_case);
            if distance == 2 {
                scalar *= 0.95;
            } else if distance == 3 {
                scalar *= 0.9;
            }
            valence += scalar;
        }

        let start = i.saturating_sub(LOOKBACK);
        if tokens[start..i].iter().any(|t| self.is_negation(&t.lower)) {
            valence *= NEGATION_SCALAR;
        }

        valence
    }

    /// Booster/dampener adjustment contributed by `modifier` to `valence`
    fn modifier_scalar(&self, modifier: &Token<'_>, valence: f64, mixed_case: bool) -> f64 {
        let word = modifier.lower.as_str();
        let mut scalar = if self.boosters.contains(word) {
            BOOSTER_INCREMENT
        } else if self.dampeners.contains(word) {
            -BOOSTER_INCREMENT
        } else {
            return 0.0;
        };

        if mixed_case && is_all_caps(modifier.raw) {
            scalar += CAPS_INCREMENT.copysign(scalar);
        }
        if valence < 0.0 {
            scalar = -scalar;
        }
        scalar
    }

    fn is_negation(&self, word: &str) -> bool {
        let stripped: String = word.chars().filter(|c| *c != '\'' && *c != '\u{2019}').collect();
        self.negations.contains(stripped.as_str()) || (stripped.ends_with("nt") && word.contains("n'"))
    }
}

/// Splits on whitespace and strips surrounding punctuation, keeping apostrophes
fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '\u{2019}'))
        .filter(|raw| raw.chars().any(char::is_alphanumeric))
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// True when some but not all words are upper case, so emphasis is meaningful
fn is_mixed_case(tokens: &[Token<'_>]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t.raw)).count();
    caps > 0 && caps < tokens.len()
}

fn apply_but_rule(tokens: &[Token<'_>], valences: &mut [f64]) {
    let Some(pivot) = tokens.iter().position(|t| t.lower == "but") else {
        return;
    };
    for (i, valence) in valences.iter_mut().enumerate() {
        if i < pivot {
            *valence *= 0.5;
        } else if i > pivot {
            *valence *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = if questions > 1 {
        (questions as f64 * QUESTION_INCREMENT).min(MAX_QUESTION_EMPHASIS)
    } else {
        0.0
    };
    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn score_valences(valences: &[f64], emphasis: f64) -> SentimentScores {
    let mut total: f64 = valences.iter().sum();
    if total > 0.0 {
        total += emphasis;
    } else if total < 0.0 {
        total -= emphasis;
    }
    let compound = normalize(total);

    // Sentiment words weigh 1 + |valence|; neutral words weigh 1
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0usize;
    for &valence in valences {
        if valence > 0.0 {
            pos_sum += valence + 1.0;
        } else if valence < 0.0 {
            neg_sum += valence.abs() + 1.0;
        } else {
            neu_count += 1;
        }
    }

    if pos_sum > neg_sum {
        pos_sum += emphasis;
    } else if neg_sum > pos_sum {
        neg_sum += emphasis;
    }

    let weight = pos_sum + neg_sum + neu_count as f64;
    if weight == 0.0 {
        return SentimentScores::neutral();
    }

    SentimentScores {
        pos: pos_sum / weight,
        neu: neu_count as f64 / weight,
        neg: neg_sum / weight,
        compound,
    }
}
