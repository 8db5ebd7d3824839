// Entry store
//
// Storage port for journal entries, mood check-ins and community posts.
// `JsonlStore` appends one JSON object per line under the data directory;
// `MemoryStore` backs tests and callers that persist elsewhere. Both return
// records newest first.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::community::CommunityPost;
use crate::errors::MindhavenError;
use crate::journal::JournalEntry;
use crate::mood::MoodEntry;

pub const JOURNAL_FILE: &str = "journal.jsonl";
pub const MOOD_FILE: &str = "mood.jsonl";
pub const POSTS_FILE: &str = "community.jsonl";

pub trait EntryStore {
    fn save_journal(&mut self, entry: &JournalEntry) -> Result<()>;

    fn save_mood(&mut self, entry: &MoodEntry) -> Result<()>;

    fn save_post(&mut self, post: &CommunityPost) -> Result<()>;

    /// Newest first
    fn journal_entries(&self) -> Result<Vec<JournalEntry>>;

    /// Newest first
    fn mood_entries(&self) -> Result<Vec<MoodEntry>>;

    /// Newest first
    fn posts(&self) -> Result<Vec<CommunityPost>>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    journal: Vec<JournalEntry>,
    mood: Vec<MoodEntry>,
    posts: Vec<CommunityPost>,
}

impl EntryStore for MemoryStore {
    fn save_journal(&mut self, entry: &JournalEntry) -> Result<()> {
        self.journal.insert(0, entry.clone());
        Ok(())
    }

    fn save_mood(&mut self, entry: &MoodEntry) -> Result<()> {
        self.mood.insert(0, entry.clone());
        Ok(())
    }

    fn save_post(&mut self, post: &CommunityPost) -> Result<()> {
        self.posts.insert(0, post.clone());
        Ok(())
    }

    fn journal_entries(&self) -> Result<Vec<JournalEntry>> {
        Ok(self.journal.clone())
    }

    fn mood_entries(&self) -> Result<Vec<MoodEntry>> {
        Ok(self.mood.clone())
    }

    fn posts(&self) -> Result<Vec<CommunityPost>> {
        Ok(self.posts.clone())
    }
}

/// Append-only JSON lines store
pub struct JsonlStore {
    dir: PathBuf,
}

impl JsonlStore {
    /// Open (and create if needed) a store rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn append<T: Serialize>(&self, file_name: &str, entry: &T) -> Result<()> {
        let path = self.dir.join(file_name);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let json = serde_json::to_string(entry).context("Failed to serialize entry")?;

        writeln!(file, "{}", json)
            .with_context(|| format!("Failed to write entry to {}", path.display()))?;

        Ok(())
    }

    fn load_newest_first<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file_name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path).map_err(|source| MindhavenError::Read {
            path: path.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let entry: T = serde_json::from_str(line).map_err(|e| {
                MindhavenError::Store(format!("{} line {}: {}", path.display(), index + 1, e))
            })?;
            entries.push(entry);
        }

        entries.reverse();
        tracing::debug!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(entries)
    }
}

impl EntryStore for JsonlStore {
    fn save_journal(&mut self, entry: &JournalEntry) -> Result<()> {
        self.append(JOURNAL_FILE, entry)
    }

    fn save_mood(&mut self, entry: &MoodEntry) -> Result<()> {
        self.append(MOOD_FILE, entry)
    }

    fn save_post(&mut self, post: &CommunityPost) -> Result<()> {
        self.append(POSTS_FILE, post)
    }

    fn journal_entries(&self) -> Result<Vec<JournalEntry>> {
        self.load_newest_first(JOURNAL_FILE)
    }

    fn mood_entries(&self) -> Result<Vec<MoodEntry>> {
        self.load_newest_first(MOOD_FILE)
    }

    fn posts(&self) -> Result<Vec<CommunityPost>> {
        self.load_newest_first(POSTS_FILE)
    }
}
