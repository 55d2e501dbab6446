use chrono::{Duration, NaiveDate, NaiveDateTime};
use pushkind_storefront::domain::community::{NewCommunityPost, PostCategory};
use pushkind_storefront::domain::product::ProductListQuery;
use pushkind_storefront::repository::DieselRepository;
use pushkind_storefront::repository::{CommunityPostReader, CommunityPostWriter, ProductReader};

mod common;

fn at(minutes: i64) -> NaiveDateTime {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid date");
    base + Duration::minutes(minutes)
}

fn new_post(title: &str, created_at: NaiveDateTime) -> NewCommunityPost {
    let mut post = NewCommunityPost::new("user-1", "Alice", title, "Body", PostCategory::Tips);
    post.created_at = created_at;
    post
}

#[test]
fn test_product_repository_reads_seeded_catalog() {
    let test_db = common::TestDb::new("test_product_repository_reads_seeded_catalog.db");
    let repo = DieselRepository::new(test_db.pool());

    let all = repo.list_products(ProductListQuery::new()).unwrap();
    assert_eq!(all.len(), 8);
    let ids: Vec<i32> = all.iter().map(|product| product.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

    let speaker = repo.get_product_by_id(4).unwrap().expect("seeded product");
    assert_eq!(speaker.title, "HomeHub Smart Speaker");
    assert_eq!(speaker.price_cents, 4999);
    assert!(speaker.original_price_cents.is_none());
    assert!(!speaker.features.is_empty());

    assert!(repo.get_product_by_id(999).unwrap().is_none());
}

#[test]
fn test_product_repository_filters() {
    let test_db = common::TestDb::new("test_product_repository_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    let laptops = repo
        .list_products(ProductListQuery::new().search("laptop"))
        .unwrap();
    let ids: Vec<i32> = laptops.iter().map(|product| product.id).collect();
    assert_eq!(ids, vec![1, 8]);

    let either = repo
        .list_products(ProductListQuery::new().any_terms(["gaming", "speaker"]))
        .unwrap();
    let ids: Vec<i32> = either.iter().map(|product| product.id).collect();
    assert_eq!(ids, vec![1, 4]);

    let computers = repo
        .list_products(ProductListQuery::new().category("Computers"))
        .unwrap();
    assert_eq!(computers.len(), 2);

    let limited = repo
        .list_products(ProductListQuery::new().limit(3))
        .unwrap();
    assert_eq!(limited.len(), 3);

    let nothing = repo
        .list_products(ProductListQuery::new().search("no such gadget"))
        .unwrap();
    assert!(nothing.is_empty());
}

#[test]
fn test_community_repository_orders_newest_first() {
    let test_db = common::TestDb::new("test_community_repository_orders_newest_first.db");
    let repo = DieselRepository::new(test_db.pool());

    assert!(repo.list_recent_posts(20).unwrap().is_empty());

    let older = repo.create_post(&new_post("Older", at(0))).unwrap();
    let tie_a = repo.create_post(&new_post("Tie A", at(5))).unwrap();
    let tie_b = repo.create_post(&new_post("Tie B", at(5))).unwrap();

    assert_eq!(older.category, PostCategory::Tips);
    assert_eq!(older.likes, 0);
    assert_eq!(older.replies, 0);

    let posts = repo.list_recent_posts(20).unwrap();
    let ids: Vec<i32> = posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![tie_b.id, tie_a.id, older.id]);

    let limited = repo.list_recent_posts(2).unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].title, "Tie B");
}

#[test]
fn test_community_repository_caps_feed() {
    let test_db = common::TestDb::new("test_community_repository_caps_feed.db");
    let repo = DieselRepository::new(test_db.pool());

    for minute in 0..25 {
        repo.create_post(&new_post(&format!("Post {minute}"), at(minute)))
            .unwrap();
    }

    let posts = repo.list_recent_posts(20).unwrap();
    assert_eq!(posts.len(), 20);
    assert_eq!(posts[0].title, "Post 24");
    assert_eq!(posts[19].title, "Post 5");
}
