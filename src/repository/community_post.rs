use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::community::{
        CommunityPost as DomainCommunityPost, NewCommunityPost as DomainNewCommunityPost,
    },
    models::community_post::{
        CommunityPost as DbCommunityPost, NewCommunityPost as DbNewCommunityPost,
    },
    repository::{CommunityPostReader, CommunityPostWriter, DieselRepository},
};

impl CommunityPostReader for DieselRepository {
    fn list_recent_posts(&self, limit: usize) -> RepositoryResult<Vec<DomainCommunityPost>> {
        use crate::schema::community_posts;

        let mut conn = self.conn()?;

        let posts = community_posts::table
            .order((community_posts::created_at.desc(), community_posts::id.desc()))
            .limit(limit as i64)
            .load::<DbCommunityPost>(&mut conn)?;

        Ok(posts.into_iter().map(Into::into).collect())
    }
}

impl CommunityPostWriter for DieselRepository {
    fn create_post(
        &self,
        new_post: &DomainNewCommunityPost,
    ) -> RepositoryResult<DomainCommunityPost> {
        use crate::schema::community_posts;

        let mut conn = self.conn()?;
        let db_new = DbNewCommunityPost::from(new_post);

        let created = diesel::insert_into(community_posts::table)
            .values(&db_new)
            .get_result::<DbCommunityPost>(&mut conn)?;

        Ok(created.into())
    }
}
