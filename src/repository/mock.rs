use mockall::mock;

use super::{CommunityPostReader, CommunityPostWriter, ProductReader};
use crate::domain::{
    community::{CommunityPost, NewCommunityPost},
    product::{Product, ProductListQuery},
};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub CommunityPostReader {}

    impl CommunityPostReader for CommunityPostReader {
        fn list_recent_posts(&self, limit: usize) -> RepositoryResult<Vec<CommunityPost>>;
    }
}

mock! {
    pub CommunityPostWriter {}

    impl CommunityPostWriter for CommunityPostWriter {
        fn create_post(&self, new_post: &NewCommunityPost) -> RepositoryResult<CommunityPost>;
    }
}
