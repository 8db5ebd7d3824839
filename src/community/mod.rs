// Community board
// Peer-support posts: categories, anonymous authorship and list filtering

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::MindhavenError;
use crate::store::EntryStore;

/// Author shown for anonymous posts
pub const ANONYMOUS_AUTHOR: &str = "Anonymous User";

/// Category name that matches every post when filtering
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostCategory {
    #[default]
    #[serde(rename = "General Discussion")]
    GeneralDiscussion,
    #[serde(rename = "Anxiety Support")]
    AnxietySupport,
    #[serde(rename = "Depression Support")]
    DepressionSupport,
    #[serde(rename = "Stress Management")]
    StressManagement,
    #[serde(rename = "Success Stories")]
    SuccessStories,
    #[serde(rename = "Crisis Support")]
    CrisisSupport,
    #[serde(rename = "Resources & Tips")]
    ResourcesAndTips,
}

impl PostCategory {
    /// Display order of the board's category picker
    pub const ALL: [PostCategory; 7] = [
        PostCategory::GeneralDiscussion,
        PostCategory::AnxietySupport,
        PostCategory::DepressionSupport,
        PostCategory::StressManagement,
        PostCategory::SuccessStories,
        PostCategory::CrisisSupport,
        PostCategory::ResourcesAndTips,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PostCategory::GeneralDiscussion => "General Discussion",
            PostCategory::AnxietySupport => "Anxiety Support",
            PostCategory::DepressionSupport => "Depression Support",
            PostCategory::StressManagement => "Stress Management",
            PostCategory::SuccessStories => "Success Stories",
            PostCategory::CrisisSupport => "Crisis Support",
            PostCategory::ResourcesAndTips => "Resources & Tips",
        }
    }

    /// Posts in this category carry a monitored crisis notice
    pub fn is_crisis(&self) -> bool {
        *self == PostCategory::CrisisSupport
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PostCategory {
    type Err = String;

    /// Accepts the display name in any case, or a dashed slug such as
    /// `crisis-support`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', " ");
        Self::ALL
            .into_iter()
            .find(|c| {
                let name = c.name().to_lowercase();
                name == wanted || name.replace(" & ", " ") == wanted
            })
            .ok_or_else(|| format!("unknown category '{}'", s.trim()))
    }
}

/// Parse a list filter. `All` (any case) means no category restriction.
pub fn category_filter(name: &str) -> Result<Option<PostCategory>, String> {
    if name.trim().eq_ignore_ascii_case(ALL_CATEGORIES) {
        return Ok(None);
    }
    name.parse().map(Some)
}

/// User-supplied part of a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: String,
    pub author_name: String,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    pub is_anonymous: bool,
    pub likes: u32,
    pub replies: u32,
    pub created_at: DateTime<Utc>,
}

impl CommunityPost {
    /// Build a post with zeroed counters. Title and content must be non-blank.
    pub fn new(post: NewPost, display_name: &str) -> Result<Self, MindhavenError> {
        if post.title.trim().is_empty() {
            return Err(MindhavenError::EmptyField { field: "title" });
        }
        if post.content.trim().is_empty() {
            return Err(MindhavenError::EmptyField { field: "content" });
        }

        let author_name = if post.is_anonymous {
            ANONYMOUS_AUTHOR.to_string()
        } else {
            display_name.to_string()
        };

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            author_name,
            title: post.title,
            content: post.content,
            category: post.category,
            is_anonymous: post.is_anonymous,
            likes: 0,
            replies: 0,
            created_at: Utc::now(),
        })
    }
}

/// Build, persist and return a new post
pub fn publish<S>(store: &mut S, post: NewPost, display_name: &str) -> Result<CommunityPost>
where
    S: EntryStore + ?Sized,
{
    let post = CommunityPost::new(post, display_name)?;
    store.save_post(&post)?;
    tracing::info!("Published community post {} in {}", post.id, post.category);
    Ok(post)
}

/// Posts matching the category (`None` for all) whose title or content
/// contains `term`, case-insensitively. Input order is kept.
pub fn filter_posts<'a>(
    posts: &'a [CommunityPost],
    category: Option<PostCategory>,
    term: &str,
) -> Vec<&'a CommunityPost> {
    let term = term.to_lowercase();
    posts
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| {
            p.title.to_lowercase().contains(&term) || p.content.to_lowercase().contains(&term)
        })
        .collect()
}
