/// Database test utilities with singleton pattern
///
/// Postgres tests run only when TEST_DATABASE_URL is set (directly or via
/// `.env`); otherwise `get_test_db_pool` returns `None` and the test skips.
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool};
use jobflow_lib::shared::Database;
use std::sync::{Arc, Mutex, OnceLock};

type PgPool = Pool<ConnectionManager<PgConnection>>;

static DB_POOL: OnceLock<Option<Arc<PgPool>>> = OnceLock::new();

/// Get or create the singleton test pool, with migrations applied
pub fn get_test_db_pool() -> Option<Arc<PgPool>> {
    DB_POOL
        .get_or_init(|| {
            dotenvy::dotenv().ok();
            let test_db_url = std::env::var("TEST_DATABASE_URL").ok()?;

            let manager = ConnectionManager::<PgConnection>::new(test_db_url);
            let pool = r2d2::Pool::builder()
                .max_size(10)
                .build(manager)
                .expect("Failed to create test database pool");

            Database::from_pool(pool.clone())
                .run_migrations()
                .expect("Failed to run migrations on test database");

            Some(Arc::new(pool))
        })
        .clone()
}

/// Test database handle, or `None` with a note on stderr
pub fn test_database() -> Option<Arc<Database>> {
    match get_test_db_pool() {
        Some(pool) => Some(Arc::new(Database::from_pool((*pool).clone()))),
        None => {
            eprintln!("TEST_DATABASE_URL not set, skipping Postgres test");
            None
        }
    }
}

/// Clean all lifecycle tables - use at the start of each test
pub fn clean_test_db() {
    let Some(pool) = get_test_db_pool() else {
        return;
    };
    let mut conn = pool.get().expect("Failed to get DB connection");

    diesel::sql_query(
        "TRUNCATE TABLE payments, invoices, appointments, jobs, customers, technicians CASCADE",
    )
    .execute(&mut conn)
    .expect("Failed to clean lifecycle tables");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> std::sync::MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
