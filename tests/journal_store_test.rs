// Journal pipeline and mood log persisted through the JSON lines store

use anyhow::Result;
use chrono::NaiveDate;
use mindhaven::classifier::{Emotion, Sentiment};
use mindhaven::community::{
    category_filter, filter_posts, publish, NewPost, PostCategory, ANONYMOUS_AUTHOR,
};
use mindhaven::journal::{record_entry, NewJournalEntry};
use mindhaven::mood::{entry_for, weekly_overview, MoodEntry};
use mindhaven::store::{EntryStore, JsonlStore, JOURNAL_FILE, MOOD_FILE, POSTS_FILE};
use mindhaven::Classifier;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

fn new_entry(day: u32, title: &str, content: &str) -> NewJournalEntry {
    NewJournalEntry {
        date: date(day),
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[test]
fn test_journal_entries_survive_reopen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let classifier = Classifier::default();
    let mut rng = StdRng::seed_from_u64(11);

    {
        let mut store = JsonlStore::open(temp_dir.path())?;
        record_entry(
            &mut store,
            &classifier,
            new_entry(10, "Rough", "Worried and sad about work"),
            &mut rng,
        )?;
        record_entry(
            &mut store,
            &classifier,
            new_entry(11, "Better", "Great evening, grateful for friends"),
            &mut rng,
        )?;
    }

    let store = JsonlStore::open(temp_dir.path())?;
    let entries = store.journal_entries()?;
    assert_eq!(entries.len(), 2);

    // Newest first
    assert_eq!(entries[0].title, "Better");
    assert_eq!(entries[0].sentiment, Sentiment::Positive);
    assert_eq!(entries[0].emotions, vec![Emotion::Grateful]);
    assert_eq!(entries[1].sentiment, Sentiment::Negative);
    assert_eq!(entries[1].emotions, vec![Emotion::Sad, Emotion::Anxious]);
    assert!(entries.iter().all(|e| e.ai_insights.is_some()));
    assert!(entries.iter().all(|e| !e.crisis_flag));
    assert_ne!(entries[0].id, entries[1].id);

    Ok(())
}

#[test]
fn test_empty_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = JsonlStore::open(temp_dir.path().join("nested").join("data"))?;
    assert!(store.journal_entries()?.is_empty());
    assert!(store.mood_entries()?.is_empty());
    assert!(store.dir().exists());
    Ok(())
}

#[test]
fn test_corrupt_line_reports_position() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join(JOURNAL_FILE), "{not json}\n")?;

    let store = JsonlStore::open(temp_dir.path())?;
    let err = store.journal_entries().unwrap_err();
    assert!(err.to_string().contains("line 1"));
    Ok(())
}

#[test]
fn test_week_uses_latest_checkin() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut store = JsonlStore::open(temp_dir.path())?;

    store.save_mood(&MoodEntry::new(date(12), 2, 6, 2, 4, None)?)?;
    store.save_mood(&MoodEntry::new(date(14), 3, 7, 3, 3, None)?)?;
    store.save_mood(&MoodEntry::new(date(14), 5, 8, 4, 1, Some("walked".into()))?)?;

    let raw = fs::read_to_string(temp_dir.path().join(MOOD_FILE))?;
    assert_eq!(raw.lines().count(), 3);

    let entries = store.mood_entries()?;
    assert_eq!(entry_for(&entries, date(14)).map(|e| e.mood), Some(5));

    let week = weekly_overview(&entries, date(14));
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].date, date(8));
    assert_eq!(week[4].mood, 2);
    assert_eq!(week[5].mood, 0);
    assert_eq!(week[6].mood, 5);
    assert_eq!(week[6].label, "Sat");
    Ok(())
}

#[test]
fn test_invalid_mood_rejected() {
    assert!(MoodEntry::new(date(1), 0, 8, 3, 3, None).is_err());
    assert!(MoodEntry::new(date(1), 3, 25, 3, 3, None).is_err());
    assert!(MoodEntry::new(date(1), 3, 8, 3, 6, None).is_err());
    assert!(MoodEntry::new(date(1), 5, 0, 1, 5, None).is_ok());
}

#[test]
fn test_crisis_flag_survives_reopen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    {
        let mut store = JsonlStore::open(temp_dir.path())?;
        record_entry(
            &mut store,
            &Classifier::default(),
            new_entry(12, "Late", "I feel like I cant go on"),
            &mut StdRng::seed_from_u64(4),
        )?;
    }

    let entries = JsonlStore::open(temp_dir.path())?.journal_entries()?;
    assert!(entries[0].crisis_flag);
    Ok(())
}

fn post(title: &str, content: &str, category: PostCategory, anonymous: bool) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: content.to_string(),
        category,
        is_anonymous: anonymous,
    }
}

#[test]
fn test_community_posts_persist_and_filter() -> Result<()> {
    let temp_dir = TempDir::new()?;
    {
        let mut store = JsonlStore::open(temp_dir.path())?;
        publish(
            &mut store,
            post("Panic on the bus", "Grounding helped", PostCategory::AnxietySupport, true),
            "Robin",
        )?;
        publish(
            &mut store,
            post("Three weeks in", "Journaling every night", PostCategory::SuccessStories, false),
            "Robin",
        )?;
        publish(
            &mut store,
            post("Grounding tips", "Five senses exercise", PostCategory::ResourcesAndTips, true),
            "Robin",
        )?;
    }

    let raw = fs::read_to_string(temp_dir.path().join(POSTS_FILE))?;
    assert_eq!(raw.lines().count(), 3);

    let posts = JsonlStore::open(temp_dir.path())?.posts()?;
    assert_eq!(posts.len(), 3);

    // Newest first, counters start at zero
    assert_eq!(posts[0].title, "Grounding tips");
    assert!(posts.iter().all(|p| p.likes == 0 && p.replies == 0));

    // Only named posts show the author
    assert_eq!(posts[0].author_name, ANONYMOUS_AUTHOR);
    assert_eq!(posts[1].author_name, "Robin");
    assert!(!posts[1].is_anonymous);

    // "All" plus a search term matches title or content in any category
    let all = category_filter("All").map_err(anyhow::Error::msg)?;
    let grounding = filter_posts(&posts, all, "GROUNDING");
    assert_eq!(grounding.len(), 2);
    assert_eq!(grounding[0].title, "Grounding tips");
    assert_eq!(grounding[1].title, "Panic on the bus");

    let anxiety = category_filter("Anxiety Support").map_err(anyhow::Error::msg)?;
    assert_eq!(filter_posts(&posts, anxiety, "grounding").len(), 1);
    assert!(filter_posts(&posts, anxiety, "journaling").is_empty());
    Ok(())
}

#[test]
fn test_blank_post_not_saved() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut store = JsonlStore::open(temp_dir.path())?;

    let result = publish(
        &mut store,
        post("Title", "   ", PostCategory::GeneralDiscussion, true),
        "Robin",
    );
    assert!(result.is_err());
    assert!(store.posts()?.is_empty());
    Ok(())
}
