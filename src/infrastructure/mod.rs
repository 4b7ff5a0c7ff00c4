// Storage backends implementing the transaction context

pub mod memory; // Staged in-memory tables
pub mod postgres; // Diesel on PostgreSQL

pub use memory::InMemoryStore;
pub use postgres::{PgContext, PostgresStore};
