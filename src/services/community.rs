use serde::Serialize;

use crate::domain::community::{CommunityPost, PostCategory};
use crate::domain::session::Session;
use crate::forms::community::{AddPostForm, CommunityFormError};
use crate::repository::{CommunityPostReader, CommunityPostWriter};
use crate::services::{ServiceError, ServiceResult};

/// Number of posts shown on the community board.
pub const COMMUNITY_FEED_LIMIT: usize = 20;

/// Headline numbers displayed above the board.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityStats {
    pub total_posts: &'static str,
    pub active_members: &'static str,
    pub posts_this_week: &'static str,
}

pub const COMMUNITY_STATS: CommunityStats = CommunityStats {
    total_posts: "1,234",
    active_members: "567",
    posts_this_week: "89",
};

/// Category option of the new post form.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Data required to render the community template.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityPageData {
    pub posts: Vec<CommunityPost>,
    pub stats: CommunityStats,
    pub categories: Vec<CategoryOption>,
}

fn category_options() -> Vec<CategoryOption> {
    PostCategory::ALL
        .into_iter()
        .map(|category| CategoryOption {
            value: category.as_str(),
            label: category.label(),
        })
        .collect()
}

/// Most recent posts, newest first.
pub fn list_recent_posts<R>(repo: &R) -> ServiceResult<Vec<CommunityPost>>
where
    R: CommunityPostReader + ?Sized,
{
    repo.list_recent_posts(COMMUNITY_FEED_LIMIT)
        .map_err(ServiceError::from)
}

/// Loads the community board.
pub fn load_community_page<R>(repo: &R) -> ServiceResult<CommunityPageData>
where
    R: CommunityPostReader + ?Sized,
{
    Ok(CommunityPageData {
        posts: list_recent_posts(repo)?,
        stats: COMMUNITY_STATS,
        categories: category_options(),
    })
}

/// Creates a post on behalf of the signed-in user and returns the refreshed feed.
///
/// Nothing is written unless the session carries a user and both title and
/// content are present.
pub fn create_post<R>(
    repo: &R,
    session: &Session,
    form: AddPostForm,
) -> ServiceResult<Vec<CommunityPost>>
where
    R: CommunityPostReader + CommunityPostWriter + ?Sized,
{
    let Some(user) = session.user() else {
        return Err(ServiceError::Unauthorized);
    };

    let new_post = form
        .into_new_post(&user.sub, &user.name)
        .map_err(|err| match err {
            CommunityFormError::MissingField => {
                ServiceError::Form("Please fill in all fields".to_string())
            }
            other => ServiceError::Form(other.to_string()),
        })?;

    let post = repo.create_post(&new_post).map_err(ServiceError::from)?;
    log::info!("Community post {} created by {}", post.id, post.user_id);

    list_recent_posts(repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use pushkind_common::domain::auth::AuthenticatedUser;
    use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

    use crate::domain::community::NewCommunityPost;
    use crate::repository::mock::{MockCommunityPostReader, MockCommunityPostWriter};

    struct FakeRepo {
        reader: MockCommunityPostReader,
        writer: MockCommunityPostWriter,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                reader: MockCommunityPostReader::new(),
                writer: MockCommunityPostWriter::new(),
            }
        }
    }

    impl CommunityPostReader for FakeRepo {
        fn list_recent_posts(&self, limit: usize) -> RepositoryResult<Vec<CommunityPost>> {
            self.reader.list_recent_posts(limit)
        }
    }

    impl CommunityPostWriter for FakeRepo {
        fn create_post(&self, new_post: &NewCommunityPost) -> RepositoryResult<CommunityPost> {
            self.writer.create_post(new_post)
        }
    }

    fn fixed_datetime() -> NaiveDateTime {
        match NaiveDate::from_ymd_opt(2024, 1, 1) {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            None => NaiveDateTime::default(),
        }
    }

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "user-1".to_string(),
            email: "user@example.com".to_string(),
            hub_id: 1,
            name: "Alice".to_string(),
            roles: Vec::new(),
            exp: 0,
        }
    }

    fn post(id: i32, title: &str) -> CommunityPost {
        CommunityPost {
            id,
            user_id: "user-1".to_string(),
            author_name: "Alice".to_string(),
            title: title.to_string(),
            content: "Body".to_string(),
            category: PostCategory::General,
            likes: 0,
            replies: 0,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn form(title: &str, content: &str) -> AddPostForm {
        AddPostForm {
            title: title.to_string(),
            content: content.to_string(),
            category: Some("tips".to_string()),
        }
    }

    #[test]
    fn load_community_page_returns_feed_and_stats() {
        let mut repo = MockCommunityPostReader::new();
        repo.expect_list_recent_posts()
            .times(1)
            .withf(|limit| *limit == COMMUNITY_FEED_LIMIT)
            .returning(|_| Ok(vec![post(2, "Newer"), post(1, "Older")]));

        let data = load_community_page(&repo).expect("expected success");

        assert_eq!(data.posts.len(), 2);
        assert_eq!(data.posts[0].id, 2);
        assert_eq!(data.stats.total_posts, "1,234");
        assert_eq!(data.categories.len(), 5);
    }

    #[test]
    fn create_post_requires_signed_in_user() {
        let repo = FakeRepo::new();

        for session in [Session::Anonymous, Session::SignedOut] {
            let result = create_post(&repo, &session, form("Title", "Body"));
            assert!(matches!(result, Err(ServiceError::Unauthorized)));
        }
    }

    #[test]
    fn create_post_checks_session_before_fields() {
        let repo = FakeRepo::new();

        let result = create_post(&repo, &Session::Anonymous, form("", ""));

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn create_post_rejects_empty_fields_without_writing() {
        let repo = FakeRepo::new();
        let session = Session::Authenticated(user());

        let result = create_post(&repo, &session, form("Title", "   "));

        assert!(matches!(
            result,
            Err(ServiceError::Form(message)) if message == "Please fill in all fields"
        ));
    }

    #[test]
    fn create_post_inserts_and_returns_refreshed_feed() {
        let mut repo = FakeRepo::new();
        let session = Session::Authenticated(user());

        repo.writer
            .expect_create_post()
            .times(1)
            .withf(|new_post| {
                new_post.user_id == "user-1"
                    && new_post.author_name == "Alice"
                    && new_post.title == "Fresh prompt"
                    && new_post.category == PostCategory::Tips
            })
            .returning(|_| Ok(post(3, "Fresh prompt")));
        repo.reader
            .expect_list_recent_posts()
            .times(1)
            .withf(|limit| *limit == COMMUNITY_FEED_LIMIT)
            .returning(|_| Ok(vec![post(3, "Fresh prompt"), post(2, "Older")]));

        let feed = create_post(&repo, &session, form("Fresh prompt", "Body"))
            .expect("expected success");

        assert_eq!(feed[0].id, 3);
        assert_eq!(feed[0].title, "Fresh prompt");
    }

    #[test]
    fn create_post_surfaces_backend_errors() {
        let mut repo = FakeRepo::new();
        let session = Session::Authenticated(user());

        repo.writer
            .expect_create_post()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = create_post(&repo, &session, form("Title", "Body"));

        assert!(result.is_err());
    }
}
