// Support chatbot
//
// Scripted replies sequenced as: crisis pass -> localized crisis reply,
// else topic keywords -> canned reply, else a random supportive line.
// Conversation state lives in an explicit ChatSession owned by the caller.

mod responses;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::classifier::Classifier;
use crate::crisis::{resolve_crisis_contacts, CountryCrisisProfile, DEFAULT_COUNTRY};

pub use responses::{
    crisis_banner, crisis_message, topic_response, FALLBACK_RESPONSES, GREETING, TOPIC_RESPONSES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Crisis,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotReply {
    pub text: String,
    pub kind: ReplyKind,
}

/// Per-conversation state
#[derive(Debug, Clone)]
pub struct ChatSession {
    country: String,
    crisis_detected: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY)
    }
}

impl ChatSession {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            crisis_detected: false,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }

    /// Sticky once set; cleared only by `reset`
    pub fn crisis_detected(&self) -> bool {
        self.crisis_detected
    }

    /// Contacts for the session's country (US when unknown)
    pub fn profile(&self) -> &'static CountryCrisisProfile {
        resolve_crisis_contacts(&self.country)
    }

    pub fn reset(&mut self) {
        self.crisis_detected = false;
    }
}

pub struct ChatBot<R: Rng = StdRng> {
    classifier: Classifier,
    rng: R,
}

impl ChatBot<StdRng> {
    pub fn new(classifier: Classifier) -> Self {
        Self::with_rng(classifier, StdRng::from_entropy())
    }
}

impl<R: Rng> ChatBot<R> {
    /// Use a caller-supplied RNG, e.g. a seeded `StdRng` in tests
    pub fn with_rng(classifier: Classifier, rng: R) -> Self {
        Self { classifier, rng }
    }

    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Reply to one user message. Blank messages get no reply.
    pub fn reply(&mut self, session: &mut ChatSession, message: &str) -> Option<BotReply> {
        if message.trim().is_empty() {
            return None;
        }

        if self.classifier.is_crisis(message) {
            session.crisis_detected = true;
            let profile = session.profile();
            tracing::info!("Crisis reply using {} contacts", profile.code);

            return Some(BotReply {
                text: crisis_message(profile),
                kind: ReplyKind::Crisis,
            });
        }

        let lower = message.to_lowercase();
        let text = match topic_response(&lower) {
            Some(reply) => reply,
            None => FALLBACK_RESPONSES
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(FALLBACK_RESPONSES[0]),
        };

        Some(BotReply {
            text: text.to_string(),
            kind: ReplyKind::Normal,
        })
    }

    /// Contact summary to show once a crisis has come up, if it has
    pub fn crisis_banner(&self, session: &ChatSession) -> Option<String> {
        session
            .crisis_detected()
            .then(|| crisis_banner(session.profile()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot(seed: u64) -> ChatBot<StdRng> {
        ChatBot::with_rng(Classifier::default(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_blank_message_ignored() {
        let mut session = ChatSession::default();
        assert!(bot(1).reply(&mut session, "   ").is_none());
    }

    #[test]
    fn test_crisis_reply_sets_session_flag() {
        let mut bot = bot(1);
        let mut session = ChatSession::new("CA");
        assert!(bot.crisis_banner(&session).is_none());

        let reply = bot.reply(&mut session, "I want to end it all").unwrap();
        assert_eq!(reply.kind, ReplyKind::Crisis);
        assert!(reply.text.contains("In Canada, you can call 911"));
        assert!(reply.text.contains("1-833-456-4566 for Talk Suicide Canada"));
        assert!(session.crisis_detected());

        // Flag is sticky across normal messages
        bot.reply(&mut session, "thanks").unwrap();
        assert!(session.crisis_detected());
        assert!(bot.crisis_banner(&session).unwrap().contains("686868"));

        session.reset();
        assert!(!session.crisis_detected());
    }

    #[test]
    fn test_crisis_beats_topics() {
        let mut session = ChatSession::default();
        // "sad" would match a topic, but crisis is checked first
        let reply = bot(1).reply(&mut session, "so sad I feel hopeless").unwrap();
        assert_eq!(reply.kind, ReplyKind::Crisis);
    }

    #[test]
    fn test_unknown_country_uses_us() {
        let mut session = ChatSession::new("ZZ");
        let reply = bot(1).reply(&mut session, "suicide").unwrap();
        assert!(reply.text.contains("988 for Suicide & Crisis Lifeline"));
    }

    #[test]
    fn test_fallback_is_seeded() {
        let mut first = ChatSession::default();
        let mut second = ChatSession::default();
        let a = bot(42).reply(&mut first, "just a normal day").unwrap();
        let b = bot(42).reply(&mut second, "just a normal day").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.kind, ReplyKind::Normal);
        assert!(FALLBACK_RESPONSES.contains(&a.text.as_str()));
    }
}
