use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::community::{
    CommunityPost as DomainCommunityPost, NewCommunityPost as DomainNewCommunityPost,
    PostCategory,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::community_posts)]
pub struct CommunityPost {
    pub id: i32,
    pub user_id: String,
    pub author_name: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub likes: i32,
    pub replies: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::community_posts)]
pub struct NewCommunityPost<'a> {
    pub user_id: &'a str,
    pub author_name: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub category: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CommunityPost> for DomainCommunityPost {
    fn from(value: CommunityPost) -> Self {
        let category = value.category.parse().unwrap_or_else(|err| {
            log::warn!("Community post {} has {err}, showing as general", value.id);
            PostCategory::General
        });

        Self {
            id: value.id,
            user_id: value.user_id,
            author_name: value.author_name,
            title: value.title,
            content: value.content,
            category,
            likes: value.likes,
            replies: value.replies,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCommunityPost> for NewCommunityPost<'a> {
    fn from(value: &'a DomainNewCommunityPost) -> Self {
        Self {
            user_id: value.user_id.as_str(),
            author_name: value.author_name.as_str(),
            title: value.title.as_str(),
            content: value.content.as_str(),
            category: value.category.as_str(),
            created_at: value.created_at,
            updated_at: value.created_at,
        }
    }
}
