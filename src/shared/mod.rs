// Shared kernel used by every lifecycle module

pub mod application; // Pagination and transaction context
pub mod config; // Environment configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Connection pool and migrations
pub mod utils; // Logging and validation

// Re-exports for convenience
pub use config::{AppConfig, DatabaseConfig};
pub use infrastructure::database::Database;
