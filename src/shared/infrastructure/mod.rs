/// Shared infrastructure concerns
///
/// Connection pooling and migrations shared by every persistence adapter.
pub mod database;

pub use database::{Database, DbConnection, DbPool, PoolStatus};
