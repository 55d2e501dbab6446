pub use pushkind_common::services::errors::{ServiceError, ServiceResult};

pub mod analytics;
pub mod assistant;
pub mod catalog;
pub mod community;
pub mod main;
pub mod marketplace;
pub mod optimizer;
pub mod search;
