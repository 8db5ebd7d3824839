// Text classifier
//
// Three independent keyword passes over one input:
// - sentiment: whole-token counts against the positive/negative word lists
// - emotions: whole-token presence per emotion category
// - crisis: raw substring containment of crisis phrases (see crisis::CrisisDetector)
//
// The passes tokenize differently on purpose. Multi-word crisis phrases such
// as "kill myself" cannot be matched token by token.

mod emotion;
mod sentiment;
mod tokens;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::crisis::CrisisDetector;

pub use emotion::{extract_emotions, Emotion, EMOTION_KEYWORDS};
pub use sentiment::{analyze_sentiment, Sentiment, NEGATIVE_WORDS, POSITIVE_WORDS};
pub use tokens::tokenize;

/// Classification of one piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub sentiment: Sentiment,
    /// Never empty; `[Neutral]` when no category matched
    pub emotions: Vec<Emotion>,
    pub crisis_flag: bool,
}

impl ClassificationResult {
    pub fn has_emotion(&self, emotion: Emotion) -> bool {
        self.emotions.contains(&emotion)
    }
}

/// Classifier with a configurable crisis phrase list.
///
/// Sentiment and emotion word lists are fixed; only the crisis phrases can
/// be replaced (see `config::Config::crisis_keywords_path`).
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    detector: CrisisDetector,
}

impl Classifier {
    pub fn new(detector: CrisisDetector) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &CrisisDetector {
        &self.detector
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        let tokens = tokenize(text);

        ClassificationResult {
            sentiment: analyze_sentiment(&tokens),
            emotions: extract_emotions(&tokens),
            crisis_flag: self.detector.detect_crisis(text),
        }
    }

    /// Crisis pass only
    pub fn is_crisis(&self, text: &str) -> bool {
        self.detector.detect_crisis(text)
    }
}

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(Classifier::default);

/// Classify text with the built-in keyword tables
pub fn classify(text: &str) -> ClassificationResult {
    DEFAULT_CLASSIFIER.classify(text)
}
