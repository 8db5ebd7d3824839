// Guided content
//
// Canned meditation/breathing scripts, the pre-built library and the
// recommendation rule that picks a topic from the user's current state.
// Audio rendering of scripts happens outside this crate.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stress level above which breathing work is recommended
pub const HIGH_STRESS_THRESHOLD: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Meditation,
    Breathing,
    Education,
    Exercise,
}

impl ContentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::Meditation => "meditation",
            ContentCategory::Breathing => "breathing",
            ContentCategory::Education => "education",
            ContentCategory::Exercise => "exercise",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meditation" => Ok(ContentCategory::Meditation),
            "breathing" => Ok(ContentCategory::Breathing),
            "education" => Ok(ContentCategory::Education),
            "exercise" => Ok(ContentCategory::Exercise),
            other => Err(format!(
                "unknown category '{}' (expected meditation, breathing, education or exercise)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Topics with a full script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentTopic {
    AnxietyBreathing,
    DepressionSupport,
    MindfulnessMeditation,
    SleepPreparation,
}

impl ContentTopic {
    pub const ALL: [ContentTopic; 4] = [
        ContentTopic::AnxietyBreathing,
        ContentTopic::DepressionSupport,
        ContentTopic::MindfulnessMeditation,
        ContentTopic::SleepPreparation,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ContentTopic::AnxietyBreathing => "anxiety-breathing",
            ContentTopic::DepressionSupport => "depression-support",
            ContentTopic::MindfulnessMeditation => "mindfulness-meditation",
            ContentTopic::SleepPreparation => "sleep-preparation",
        }
    }

    /// Parse a slug; unknown slugs map to mindfulness meditation
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.slug() == slug)
            .unwrap_or(ContentTopic::MindfulnessMeditation)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ContentTopic::AnxietyBreathing => "Calming Breath for Anxiety Relief",
            ContentTopic::DepressionSupport => "Gentle Support for Difficult Days",
            ContentTopic::MindfulnessMeditation => "Present Moment Awareness",
            ContentTopic::SleepPreparation => "Peaceful Sleep Meditation",
        }
    }

    pub fn script(&self) -> &'static str {
        match self {
            ContentTopic::AnxietyBreathing => ANXIETY_BREATHING_SCRIPT,
            ContentTopic::DepressionSupport => DEPRESSION_SUPPORT_SCRIPT,
            ContentTopic::MindfulnessMeditation => MINDFULNESS_SCRIPT,
            ContentTopic::SleepPreparation => SLEEP_PREPARATION_SCRIPT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidedContent {
    pub id: String,
    pub title: String,
    pub script: String,
    /// Display duration, e.g. "10 min"
    pub duration: String,
    pub category: ContentCategory,
    pub difficulty: Difficulty,
}

/// Build a scripted session for a topic
pub fn generate(
    topic: ContentTopic,
    minutes: u32,
    category: ContentCategory,
    difficulty: Difficulty,
) -> GuidedContent {
    GuidedContent {
        id: format!("ai-{}", Utc::now().timestamp_millis()),
        title: topic.title().to_string(),
        script: topic.script().trim().to_string(),
        duration: format!("{} min", minutes),
        category,
        difficulty,
    }
}

/// Topic and category for the user's current state
pub fn recommend_topic(
    mood: &str,
    recent_journal: &[String],
    stress_level: u8,
) -> (ContentTopic, ContentCategory) {
    if stress_level > HIGH_STRESS_THRESHOLD {
        return (ContentTopic::AnxietyBreathing, ContentCategory::Breathing);
    }

    if mood == "sad" || mood == "depressed" {
        return (ContentTopic::DepressionSupport, ContentCategory::Education);
    }

    let mentions_sleep = recent_journal.iter().any(|entry| {
        let lower = entry.to_lowercase();
        lower.contains("sleep") || lower.contains("tired")
    });
    if mentions_sleep {
        return (ContentTopic::SleepPreparation, ContentCategory::Meditation);
    }

    (ContentTopic::MindfulnessMeditation, ContentCategory::Meditation)
}

/// Ten-minute beginner session picked by `recommend_topic`
pub fn recommend(mood: &str, recent_journal: &[String], stress_level: u8) -> GuidedContent {
    let (topic, category) = recommend_topic(mood, recent_journal, stress_level);
    tracing::debug!("Recommending {} ({})", topic.slug(), category);
    generate(topic, 10, category, Difficulty::Beginner)
}

/// Pre-built library, in display order
pub fn library() -> Vec<GuidedContent> {
    let item = |id: &str, title: &str, script: &str, minutes: u32, category: ContentCategory| {
        GuidedContent {
            id: id.to_string(),
            title: title.to_string(),
            script: script.to_string(),
            duration: format!("{} min", minutes),
            category,
            difficulty: Difficulty::Beginner,
        }
    };

    vec![
        item(
            "ai-1",
            "Morning Mindfulness",
            "A gentle way to start your day with intention and peace...",
            8,
            ContentCategory::Meditation,
        ),
        item(
            "ai-2",
            "Stress Relief Breathing",
            "Quick and effective breathing techniques for immediate stress relief...",
            5,
            ContentCategory::Breathing,
        ),
        item(
            "ai-3",
            "Understanding Anxiety",
            "Learn about anxiety, its symptoms, and healthy coping strategies...",
            12,
            ContentCategory::Education,
        ),
        item(
            "ai-4",
            "Gentle Movement for Mental Health",
            "Simple, mindful movements to boost mood and reduce tension...",
            15,
            ContentCategory::Exercise,
        ),
    ]
}

/// Library items matching a category filter and a case-insensitive search
/// over title and script. `None` means all categories.
pub fn search(
    items: &[GuidedContent],
    category: Option<ContentCategory>,
    term: &str,
) -> Vec<GuidedContent> {
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .filter(|c| {
            c.title.to_lowercase().contains(&term) || c.script.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

const ANXIETY_BREATHING_SCRIPT: &str = "
Welcome to this gentle breathing exercise designed to help ease anxiety and bring you back to a place of calm.

Find a comfortable position, either sitting or lying down. Allow your eyes to close gently, or soften your gaze downward.

Let's begin by simply noticing your breath as it is right now. There's no need to change anything yet - just observe.

Now, we'll practice the 4-7-8 breathing technique. This ancient practice helps activate your body's natural relaxation response.

Breathe in through your nose for a count of 4... 1, 2, 3, 4.
Hold your breath gently for 7 counts... 1, 2, 3, 4, 5, 6, 7.
Exhale slowly through your mouth for 8 counts... 1, 2, 3, 4, 5, 6, 7, 8.

Let's repeat this cycle three more times, allowing each breath to carry away tension and worry.

Remember, you are safe in this moment. You are exactly where you need to be.
";

const DEPRESSION_SUPPORT_SCRIPT: &str = "
Hello, and thank you for taking this time for yourself. That itself is an act of courage and self-compassion.

Depression can feel like a heavy fog that makes everything seem distant and difficult. But you are not alone in this experience.

Today, let's focus on small, gentle steps toward healing. Sometimes the most powerful thing we can do is simply acknowledge where we are without judgment.

Take a moment to place one hand on your heart and one on your belly. Feel the warmth of your own touch - this is you caring for yourself.

Breathe naturally and repeat these words silently: \"I am worthy of love and care. I am doing the best I can. This feeling will pass.\"

Depression often tells us lies about our worth and our future. But feelings, even the most difficult ones, are temporary visitors.

You have survived difficult days before, and you have the strength to navigate this one too.
";

const MINDFULNESS_SCRIPT: &str = "
Welcome to this mindfulness meditation. This is your time to pause, breathe, and reconnect with the present moment.

Begin by finding a comfortable position. Allow your spine to be straight but not rigid, like a mountain - grounded yet reaching upward.

Close your eyes or soften your gaze. Take three deep breaths, letting each exhale release any tension you've been carrying.

Now, bring your attention to your breath. Notice the sensation of air entering your nostrils, filling your lungs, and gently leaving your body.

Your mind will naturally wander - this is not a problem. When you notice thoughts arising, simply acknowledge them with kindness and gently return your attention to your breath.

Think of your breath as an anchor, always available to bring you back to this moment of peace and presence.

Continue breathing naturally, allowing yourself to rest in this space of awareness and calm.
";

const SLEEP_PREPARATION_SCRIPT: &str = "
Welcome to this peaceful sleep preparation meditation. It's time to let go of the day and prepare your mind and body for restorative rest.

Begin by making yourself comfortable in your bed. Adjust your pillows and blankets so you feel completely supported.

Take a deep breath in, and as you exhale, allow your body to sink deeper into your mattress. Feel yourself being held and supported.

Starting from the top of your head, we'll gently release tension from each part of your body.

Relax your forehead, let your eyes grow heavy, soften your jaw. Allow your shoulders to drop away from your ears.

Feel your arms becoming heavy and relaxed. Let your chest rise and fall naturally with each peaceful breath.

Release any tension in your back, your hips, your legs. Feel your whole body melting into comfort and ease.

As you drift toward sleep, know that you are safe, you are peaceful, and you deserve this rest.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "Breathing".parse::<ContentCategory>(),
            Ok(ContentCategory::Breathing)
        );
        assert!("yoga".parse::<ContentCategory>().is_err());
    }

    #[test]
    fn test_high_stress_wins() {
        let journal = vec!["so tired".to_string()];
        assert_eq!(
            recommend_topic("sad", &journal, 8),
            (ContentTopic::AnxietyBreathing, ContentCategory::Breathing)
        );
        // Exactly at the threshold is not "high"
        assert_eq!(
            recommend_topic("sad", &journal, 7).0,
            ContentTopic::DepressionSupport
        );
    }

    #[test]
    fn test_sleep_mentions_case_insensitive() {
        let journal = vec!["Work was fine".to_string(), "Couldn't SLEEP again".to_string()];
        assert_eq!(
            recommend_topic("okay", &journal, 3),
            (ContentTopic::SleepPreparation, ContentCategory::Meditation)
        );
    }

    #[test]
    fn test_default_is_mindfulness() {
        assert_eq!(
            recommend_topic("happy", &[], 2),
            (ContentTopic::MindfulnessMeditation, ContentCategory::Meditation)
        );
    }

    #[test]
    fn test_recommend_builds_ten_minute_beginner_session() {
        let content = recommend("depressed", &[], 1);
        assert_eq!(content.title, "Gentle Support for Difficult Days");
        assert_eq!(content.duration, "10 min");
        assert_eq!(content.difficulty, Difficulty::Beginner);
        assert_eq!(content.category, ContentCategory::Education);
        assert!(content.id.starts_with("ai-"));
        assert!(content.script.starts_with("Hello, and thank you"));
    }

    #[test]
    fn test_unknown_slug_falls_back() {
        assert_eq!(
            ContentTopic::from_slug("yoga"),
            ContentTopic::MindfulnessMeditation
        );
        assert_eq!(
            ContentTopic::from_slug("sleep-preparation"),
            ContentTopic::SleepPreparation
        );
    }

    #[test]
    fn test_library_and_search() {
        let items = library();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].id, "ai-1");

        let breathing = search(&items, Some(ContentCategory::Breathing), "");
        assert_eq!(breathing.len(), 1);
        assert_eq!(breathing[0].title, "Stress Relief Breathing");

        let anxiety = search(&items, None, "ANXIETY");
        assert_eq!(anxiety.len(), 1);
        assert_eq!(anxiety[0].id, "ai-3");
    }
}
