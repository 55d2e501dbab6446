pub mod community_post;
pub mod product;
