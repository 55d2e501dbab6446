use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::community::{CommunityPost, NewCommunityPost};
use crate::domain::product::{Product, ProductListQuery};

pub mod community_post;
pub mod product;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over the product catalog.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Read-only operations over community posts.
pub trait CommunityPostReader {
    /// Most recent posts first, at most `limit` of them.
    fn list_recent_posts(&self, limit: usize) -> RepositoryResult<Vec<CommunityPost>>;
}

/// Write operations over community posts.
pub trait CommunityPostWriter {
    fn create_post(&self, new_post: &NewCommunityPost) -> RepositoryResult<CommunityPost>;
}
