// Sentiment pass - whole-token polarity counting

use serde::{Deserialize, Serialize};
use std::fmt;

/// Words counted toward positive polarity
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "wonderful",
    "amazing",
    "love",
    "joy",
    "excited",
    "grateful",
    "blessed",
];

/// Words counted toward negative polarity
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "bad",
    "terrible",
    "awful",
    "hate",
    "angry",
    "depressed",
    "anxious",
    "worried",
    "stressed",
];

/// Coarse three-way polarity of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify polarity from pre-tokenized, lowercased input.
///
/// Every occurrence counts, so "sad sad happy" is negative. Ties
/// (including zero hits on both sides) are neutral.
pub fn analyze_sentiment(tokens: &[String]) -> Sentiment {
    let positive = tokens
        .iter()
        .filter(|t| POSITIVE_WORDS.contains(&t.as_str()))
        .count();
    let negative = tokens
        .iter()
        .filter(|t| NEGATIVE_WORDS.contains(&t.as_str()))
        .count();

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
