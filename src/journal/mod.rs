// Journal module
// Journal entries, their sentiment/emotion tagging and the insight line
//
// The insight is narrative filler, not analysis. It is picked from a fixed
// pool through an injected RNG so callers can seed it for reproducible output.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, Emotion, Sentiment};
use crate::store::EntryStore;

/// Sentiment, emotions and insight for one journal text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalAnalysis {
    pub sentiment: Sentiment,
    pub emotions: Vec<Emotion>,
    pub crisis_flag: bool,
    pub insight: String,
}

/// Stored journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub sentiment: Sentiment,
    pub emotions: Vec<Emotion>,
    /// Crisis language was found in the content when it was saved
    #[serde(default)]
    pub crisis_flag: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User-supplied part of a journal entry
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
}

/// The four candidate insight lines for a classification
pub fn insight_pool(sentiment: Sentiment, emotions: &[Emotion]) -> [String; 4] {
    let emotion_list = emotions
        .iter()
        .map(Emotion::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    [
        format!(
            "Your journal entry shows {} sentiment. This reflects your current emotional state.",
            sentiment
        ),
        format!(
            "The emotions detected ({}) suggest you're processing various feelings.",
            emotion_list
        ),
        "Consider practicing mindfulness exercises to maintain emotional balance.".to_string(),
        "Your self-reflection shows good emotional awareness - keep journaling regularly."
            .to_string(),
    ]
}

/// Pick one insight line uniformly at random
pub fn pick_insight<R: Rng + ?Sized>(
    rng: &mut R,
    sentiment: Sentiment,
    emotions: &[Emotion],
) -> String {
    let pool = insight_pool(sentiment, emotions);
    // The pool is a fixed-size array, so choose() always returns Some
    pool.choose(rng).cloned().unwrap_or_default()
}

/// Classify a journal text and attach an insight line
pub fn analyze<R: Rng + ?Sized>(
    classifier: &Classifier,
    content: &str,
    rng: &mut R,
) -> JournalAnalysis {
    let result = classifier.classify(content);
    let insight = pick_insight(rng, result.sentiment, &result.emotions);

    JournalAnalysis {
        sentiment: result.sentiment,
        emotions: result.emotions,
        crisis_flag: result.crisis_flag,
        insight,
    }
}

/// Analyze, persist and return a new journal entry.
///
/// A crisis hit is recorded in `crisis_flag`; surfacing contacts for it is
/// left to the caller.
pub fn record_entry<S, R>(
    store: &mut S,
    classifier: &Classifier,
    entry: NewJournalEntry,
    rng: &mut R,
) -> Result<JournalEntry>
where
    S: EntryStore + ?Sized,
    R: Rng + ?Sized,
{
    let analysis = analyze(classifier, &entry.content, rng);

    let stored = JournalEntry {
        id: uuid::Uuid::new_v4().to_string(),
        date: entry.date,
        title: entry.title,
        content: entry.content,
        sentiment: analysis.sentiment,
        emotions: analysis.emotions,
        crisis_flag: analysis.crisis_flag,
        ai_insights: Some(analysis.insight),
        created_at: Utc::now(),
    };

    store.save_journal(&stored)?;
    tracing::info!(
        "Saved journal entry {} ({} sentiment)",
        stored.id,
        stored.sentiment
    );

    Ok(stored)
}
