// Emotion pass - per-category keyword presence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion tag. `Neutral` is only ever produced on its own, when no
/// category keyword is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Anxious,
    Angry,
    Grateful,
    Hopeful,
    Lonely,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Anxious => "anxious",
            Emotion::Angry => "angry",
            Emotion::Grateful => "grateful",
            Emotion::Hopeful => "hopeful",
            Emotion::Lonely => "lonely",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword lists per category, in output order
pub const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (Emotion::Happy, &["happy", "joy", "excited", "cheerful", "elated"]),
    (Emotion::Sad, &["sad", "down", "blue", "melancholy", "depressed"]),
    (
        Emotion::Anxious,
        &["anxious", "worried", "nervous", "stressed", "overwhelmed"],
    ),
    (
        Emotion::Angry,
        &["angry", "mad", "frustrated", "irritated", "furious"],
    ),
    (
        Emotion::Grateful,
        &["grateful", "thankful", "blessed", "appreciative"],
    ),
    (
        Emotion::Hopeful,
        &["hopeful", "optimistic", "confident", "positive"],
    ),
    (
        Emotion::Lonely,
        &["lonely", "isolated", "alone", "disconnected"],
    ),
];

/// Extract the emotion categories present in pre-tokenized input.
///
/// Categories come back in table order with no duplicates. Never empty:
/// `[Neutral]` when nothing matches.
pub fn extract_emotions(tokens: &[String]) -> Vec<Emotion> {
    let found: Vec<Emotion> = EMOTION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| tokens.iter().any(|t| keywords.contains(&t.as_str())))
        .map(|(emotion, _)| *emotion)
        .collect();

    if found.is_empty() {
        vec![Emotion::Neutral]
    } else {
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::tokens::tokenize;

    #[test]
    fn test_multiple_categories_in_table_order() {
        let emotions = extract_emotions(&tokenize("Feeling alone and worried, but thankful"));
        assert_eq!(
            emotions,
            vec![Emotion::Anxious, Emotion::Grateful, Emotion::Lonely]
        );
    }

    #[test]
    fn test_no_match_is_neutral() {
        assert_eq!(extract_emotions(&tokenize("a plain day")), vec![Emotion::Neutral]);
        assert_eq!(extract_emotions(&[]), vec![Emotion::Neutral]);
    }

    #[test]
    fn test_category_reported_once() {
        assert_eq!(
            extract_emotions(&tokenize("happy happy joy joy")),
            vec![Emotion::Happy]
        );
    }

    #[test]
    fn test_whole_token_only() {
        // "download" contains "down" but is a different token
        assert_eq!(extract_emotions(&tokenize("download")), vec![Emotion::Neutral]);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Emotion::Grateful).unwrap();
        assert_eq!(json, "\"grateful\"");
    }
}
