use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use pushkind_common::routes::empty_string_as_none;

use crate::domain::community::{NewCommunityPost, PostCategory, UnknownCategory};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for a post title.
const TITLE_MAX_LEN: usize = 200;
const TITLE_MAX_LEN_VALIDATOR: u64 = TITLE_MAX_LEN as u64;
/// Maximum allowed length for a post body.
const CONTENT_MAX_LEN: usize = 10_000;
const CONTENT_MAX_LEN_VALIDATOR: u64 = CONTENT_MAX_LEN as u64;

/// Result type returned by the community form helpers.
pub type CommunityFormResult<T> = Result<T, CommunityFormError>;

/// Errors that can occur while processing the new post form.
#[derive(Debug, Error)]
pub enum CommunityFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// Title or content is empty after sanitization.
    #[error("title and content are required")]
    MissingField,
    /// The category is not one of the known board sections.
    #[error(transparent)]
    Category(#[from] UnknownCategory),
}

/// Form payload emitted when submitting the "New post" form.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddPostForm {
    #[serde(default)]
    #[validate(length(max = TITLE_MAX_LEN_VALIDATOR))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = CONTENT_MAX_LEN_VALIDATOR))]
    pub content: String,
    /// Board section; defaults to `general`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<String>,
}

impl AddPostForm {
    /// Validates and sanitizes the payload into a domain `NewCommunityPost`.
    pub fn into_new_post(
        self,
        user_id: &str,
        author_name: &str,
    ) -> CommunityFormResult<NewCommunityPost> {
        let sanitized = AddPostForm {
            title: sanitize_inline_text(&self.title),
            content: sanitize_multiline_text(&self.content),
            category: self.category,
        };
        if sanitized.title.is_empty() || sanitized.content.is_empty() {
            return Err(CommunityFormError::MissingField);
        }

        sanitized.validate()?;

        let AddPostForm {
            title,
            content,
            category,
        } = sanitized;
        let category = match category.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value.parse::<PostCategory>()?,
            _ => PostCategory::default(),
        };

        Ok(NewCommunityPost::new(
            user_id,
            author_name,
            title,
            content,
            category,
        ))
    }
}
