use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Topic a community post is filed under.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostCategory {
    #[default]
    General,
    Prompts,
    Tips,
    Showcase,
    Questions,
}

impl PostCategory {
    /// Every category in the order the board lists them.
    pub const ALL: [PostCategory; 5] = [
        PostCategory::General,
        PostCategory::Prompts,
        PostCategory::Tips,
        PostCategory::Showcase,
        PostCategory::Questions,
    ];

    /// Value stored in the database and sent by forms.
    pub fn as_str(self) -> &'static str {
        match self {
            PostCategory::General => "general",
            PostCategory::Prompts => "prompts",
            PostCategory::Tips => "tips",
            PostCategory::Showcase => "showcase",
            PostCategory::Questions => "questions",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            PostCategory::General => "General Discussion",
            PostCategory::Prompts => "Prompt Sharing",
            PostCategory::Tips => "Tips & Tricks",
            PostCategory::Showcase => "Showcase",
            PostCategory::Questions => "Questions",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category string is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for PostCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PostCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// Domain representation of a message on the community board.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommunityPost {
    /// Unique identifier of the post.
    pub id: i32,
    /// Subject of the authenticated user who wrote the post.
    pub user_id: String,
    /// Display name of the author at the time of posting.
    pub author_name: String,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    /// Like counter. Not updated by this service.
    pub likes: i32,
    /// Reply counter. Not updated by this service.
    pub replies: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new community post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCommunityPost {
    pub user_id: String,
    pub author_name: String,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    /// Timestamp captured when the payload was created.
    pub created_at: NaiveDateTime,
}

impl NewCommunityPost {
    /// Build a new post payload stamped with the current time.
    pub fn new(
        user_id: impl Into<String>,
        author_name: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: PostCategory,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            author_name: author_name.into(),
            title: title.into(),
            content: content.into(),
            category,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
