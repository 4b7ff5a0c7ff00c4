pub mod models;
pub mod repository;

pub use models::JobModel;
