/// Shared application layer patterns
///
/// Pagination plus the explicit transaction context every saga threads through
/// its participants.
pub mod pagination;
pub mod transaction;

pub use pagination::*;
pub use transaction::{TransactionContext, TransactionManager};
