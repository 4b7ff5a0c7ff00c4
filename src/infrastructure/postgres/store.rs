use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use tokio::task;

use crate::shared::application::{TransactionContext, TransactionManager};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::LogContext;

/// Transaction context over a single pooled Postgres connection
pub struct PgContext<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PgContext<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub(crate) fn conn(&mut self) -> &mut PgConnection {
        &mut *self.conn
    }
}

/// Store backed by the shared r2d2 pool.
///
/// Diesel is synchronous, so every unit of work runs on the blocking pool.
/// Transactions use SERIALIZABLE isolation; together with the constraints in
/// `migrations/` this closes the read-then-decide races of the sagas.
#[derive(Clone)]
pub struct PostgresStore {
    db: Arc<Database>,
}

impl PostgresStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionManager for PostgresStore {
    async fn transaction<T, F>(&self, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn TransactionContext) -> AppResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<T> {
            let mut conn = db.get_connection()?;

            let start = std::time::Instant::now();
            let result = conn
                .build_transaction()
                .serializable()
                .run::<T, AppError, _>(|conn| {
                    let mut ctx = PgContext::new(conn);
                    work(&mut ctx)
                });
            LogContext::db_transaction(
                "postgres",
                "serializable",
                start.elapsed().as_millis() as u64,
                result.is_ok(),
            );
            result
        })
        .await?
    }

    async fn execute<T, F>(&self, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn TransactionContext) -> AppResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<T> {
            let mut conn = db.get_connection()?;
            let mut ctx = PgContext::new(&mut conn);
            work(&mut ctx)
        })
        .await?
    }
}
