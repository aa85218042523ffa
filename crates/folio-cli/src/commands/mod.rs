pub mod article;
pub mod articles;
pub mod dispatch;
pub mod schema;
pub mod seed;
