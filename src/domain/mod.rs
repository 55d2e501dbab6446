pub mod assistant;
pub mod community;
pub mod optimizer;
pub mod product;
pub mod session;
