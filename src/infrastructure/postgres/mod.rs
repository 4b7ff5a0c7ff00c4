/// PostgreSQL backend for the lifecycle core
///
/// Record traits are implemented for [`PgContext`] in each module's
/// `infrastructure` folder; this module owns connection handling and the
/// transaction boundary.
pub mod store;

pub use store::{PgContext, PostgresStore};
