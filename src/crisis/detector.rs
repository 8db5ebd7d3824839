// Crisis phrase detector
//
// Raw substring containment against the lowercased message. Phrases are not
// token-bounded, so "die" also fires inside "diet" or "studied".

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in crisis phrases
pub const DEFAULT_CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "hurt myself",
    "die",
    "death",
    "hopeless",
    "no point",
    "give up",
    "cant go on",
    "self harm",
    "unalive",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisKeywords {
    pub phrases: Vec<String>,
}

impl Default for CrisisKeywords {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_CRISIS_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrisisDetector {
    /// Lowercased at construction
    phrases: Vec<String>,
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new(CrisisKeywords::default())
    }
}

impl CrisisDetector {
    pub fn new(keywords: CrisisKeywords) -> Self {
        let phrases = keywords
            .phrases
            .iter()
            .map(|p| p.to_lowercase())
            .filter(|p| !p.trim().is_empty())
            .collect();
        Self { phrases }
    }

    /// Load crisis phrases from a JSON file (`{"phrases": [...]}`)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crisis keywords file: {}", path.display()))?;

        let keywords: CrisisKeywords = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse crisis keywords file: {}", path.display()))?;

        let detector = Self::new(keywords);
        if detector.phrases.is_empty() {
            bail!(
                "Crisis keywords file {} contains no phrases",
                path.display()
            );
        }

        tracing::info!(
            "Loaded {} crisis phrases from {}",
            detector.phrases.len(),
            path.display()
        );
        Ok(detector)
    }

    /// First phrase (in list order) contained in the message, if any
    pub fn matched_phrase(&self, message: &str) -> Option<&str> {
        let lower = message.to_lowercase();
        self.phrases
            .iter()
            .find(|phrase| lower.contains(phrase.as_str()))
            .map(String::as_str)
    }

    /// Detect if the message contains any crisis phrase
    pub fn detect_crisis(&self, message: &str) -> bool {
        match self.matched_phrase(message) {
            Some(phrase) => {
                // Never log the message itself
                tracing::info!("Crisis detected: phrase '{}'", phrase);
                true
            }
            None => false,
        }
    }

    /// All phrases (for display purposes)
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}
