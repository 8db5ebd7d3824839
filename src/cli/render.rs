// Plain-text rendering for terminal output

use std::fmt::Write;

use crate::classifier::ClassificationResult;
use crate::community::CommunityPost;
use crate::content::GuidedContent;
use crate::crisis::{all_profiles, CountryCrisisProfile};
use crate::journal::JournalEntry;
use crate::mood::MoodDay;

pub fn render_classification(text: &str, result: &ClassificationResult) -> String {
    let emotions = result
        .emotions
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!(
        "{}\n  sentiment: {}\n  emotions:  {}",
        text, result.sentiment, emotions
    );
    if result.crisis_flag {
        out.push_str("\n  \x1b[1;31mcrisis language detected\x1b[0m");
    }
    out
}

/// Contact card for one country
pub fn render_profile(profile: &CountryCrisisProfile) -> String {
    let mut out = format!(
        "{} ({})\nEmergency: {}\n",
        profile.country_name, profile.code, profile.emergency_number
    );

    for contact in profile.contacts {
        let _ = write!(
            out,
            "\n  {}\n    {} [{}] {}\n    {}\n    Available: {}",
            contact.name,
            contact.number,
            contact.channel_type.action_label(),
            contact.link(),
            contact.description,
            contact.availability
        );
        if let Some(languages) = contact.languages {
            let _ = write!(out, "\n    Languages: {}", languages);
        }
        out.push('\n');
    }

    out
}

pub fn render_countries() -> String {
    all_profiles()
        .iter()
        .map(|p| format!("  {}  {} (emergency {})", p.code, p.country_name, p.emergency_number))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_journal_entry(entry: &JournalEntry) -> String {
    let emotions = entry
        .emotions
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!(
        "{}  {}\n  {}\n  sentiment: {}  emotions: {}",
        entry.date, entry.title, entry.content, entry.sentiment, emotions
    );
    if let Some(insight) = &entry.ai_insights {
        let _ = write!(out, "\n  insight: {}", insight);
    }
    out
}

/// Table of the seven-day overview; `-` marks days without a check-in
pub fn render_week(days: &[MoodDay]) -> String {
    let cell = |v: u8| {
        if v == 0 {
            "-".to_string()
        } else {
            v.to_string()
        }
    };

    let mut out = String::from("Day         Mood  Sleep  Activity  Stress");
    for day in days {
        let _ = write!(
            out,
            "\n{} {}  {:>4}  {:>5}  {:>8}  {:>6}",
            day.label,
            day.date.format("%m-%d"),
            cell(day.mood),
            cell(day.sleep),
            cell(day.activity),
            cell(day.stress)
        );
    }
    out
}

pub fn render_content(content: &GuidedContent) -> String {
    format!(
        "{} ({}, {}, {:?})\n\n{}",
        content.title, content.duration, content.category, content.difficulty, content.script
    )
}

/// One board post with its author, category and counters
pub fn render_post(post: &CommunityPost) -> String {
    let mut out = format!(
        "[{}] {}\n  by {} on {}\n  {}\n  {} likes, {} replies",
        post.category,
        post.title,
        post.author_name,
        post.created_at.format("%Y-%m-%d %H:%M"),
        post.content,
        post.likes,
        post.replies
    );
    if post.category.is_crisis() {
        out.push_str("\n  \x1b[1;31mCrisis Alert - Monitored\x1b[0m");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crisis::resolve_crisis_contacts;
    use crate::mood::weekly_overview;
    use chrono::NaiveDate;

    #[test]
    fn test_profile_lists_every_contact() {
        let gb = resolve_crisis_contacts("GB");
        let text = render_profile(gb);
        assert!(text.contains("Emergency: 999"));
        for contact in gb.contacts {
            assert!(text.contains(contact.name));
        }
    }

    #[test]
    fn test_countries_in_table_order() {
        let text = render_countries();
        let first = text.lines().next().unwrap();
        assert!(first.contains("US"));
        assert_eq!(text.lines().count(), all_profiles().len());
    }

    #[test]
    fn test_crisis_post_carries_notice() {
        use crate::community::{NewPost, PostCategory};

        let post = |category| {
            CommunityPost::new(
                NewPost {
                    title: "Tonight".to_string(),
                    content: "Rough night".to_string(),
                    category,
                    is_anonymous: true,
                },
                "You",
            )
            .unwrap()
        };

        let crisis = render_post(&post(PostCategory::CrisisSupport));
        assert!(crisis.starts_with("[Crisis Support] Tonight"));
        assert!(crisis.contains("by Anonymous User"));
        assert!(crisis.contains("Crisis Alert - Monitored"));

        assert!(!render_post(&post(PostCategory::GeneralDiscussion)).contains("Crisis Alert"));
    }

    #[test]
    fn test_empty_week_uses_dashes() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let text = render_week(&weekly_overview(&[], today));
        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().last().unwrap().starts_with("Sat 03-14"));
    }
}
