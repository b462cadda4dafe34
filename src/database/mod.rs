pub mod companies;
pub mod jobs;
pub mod manager;
pub mod models;
pub mod query_builder;
pub mod users;

pub use manager::DatabaseError;
