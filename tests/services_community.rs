use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_storefront::domain::community::PostCategory;
use pushkind_storefront::domain::session::Session;
use pushkind_storefront::forms::community::AddPostForm;
use pushkind_storefront::repository::{CommunityPostReader, DieselRepository};
use pushkind_storefront::services::ServiceError;
use pushkind_storefront::services::community::{COMMUNITY_FEED_LIMIT, create_post};

mod common;

fn signed_in() -> Session {
    Session::Authenticated(AuthenticatedUser {
        sub: "user-42".to_string(),
        email: "alice@example.com".to_string(),
        hub_id: 1,
        name: "Alice".to_string(),
        roles: Vec::new(),
        exp: 0,
    })
}

fn form(title: &str, content: &str) -> AddPostForm {
    AddPostForm {
        title: title.to_string(),
        content: content.to_string(),
        category: Some("showcase".to_string()),
    }
}

#[test]
fn submitted_post_heads_the_refreshed_feed() {
    let test_db = common::TestDb::new("test_submitted_post_heads_the_refreshed_feed.db");
    let repo = DieselRepository::new(test_db.pool());
    let session = signed_in();

    create_post(&repo, &session, form("First", "Hello")).unwrap();
    let feed = create_post(&repo, &session, form("Second", "Hello again")).unwrap();

    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].title, "Second");
    assert_eq!(feed[0].author_name, "Alice");
    assert_eq!(feed[0].user_id, "user-42");
    assert_eq!(feed[0].category, PostCategory::Showcase);
}

#[test]
fn anonymous_submission_writes_nothing() {
    let test_db = common::TestDb::new("test_anonymous_submission_writes_nothing.db");
    let repo = DieselRepository::new(test_db.pool());

    for session in [Session::Anonymous, signed_in().sign_out()] {
        let result = create_post(&repo, &session, form("Title", "Body"));
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    assert!(
        repo.list_recent_posts(COMMUNITY_FEED_LIMIT)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn incomplete_submission_writes_nothing() {
    let test_db = common::TestDb::new("test_incomplete_submission_writes_nothing.db");
    let repo = DieselRepository::new(test_db.pool());
    let session = signed_in();

    for (title, content) in [("", "Body"), ("Title", ""), ("  ", "\n")] {
        let result = create_post(&repo, &session, form(title, content));
        assert!(matches!(
            result,
            Err(ServiceError::Form(message)) if message == "Please fill in all fields"
        ));
    }

    assert!(
        repo.list_recent_posts(COMMUNITY_FEED_LIMIT)
            .unwrap()
            .is_empty()
    );
}
