pub mod infrastructure;
pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use infrastructure::PostgresStore;
use modules::{
    directory::DirectoryService,
    invoicing::InvoiceGenerator,
    jobs::JobLifecycleManager,
    payments::PaymentProcessor,
    scheduling::AppointmentScheduler,
};
use shared::application::TransactionManager;
use shared::errors::AppResult;
use shared::utils::{init_logger, LogContext};
use shared::{AppConfig, Database};

/// Every lifecycle service wired to one store
pub struct AppServices<S: TransactionManager> {
    pub jobs: JobLifecycleManager<S>,
    pub payments: PaymentProcessor<S>,
    pub directory: DirectoryService<S>,
}

impl<S: TransactionManager> AppServices<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_invoice_generator(store, InvoiceGenerator::default())
    }

    pub fn with_invoice_generator(store: Arc<S>, invoices: InvoiceGenerator) -> Self {
        Self {
            jobs: JobLifecycleManager::new(
                Arc::clone(&store),
                AppointmentScheduler::new(),
                invoices,
            ),
            payments: PaymentProcessor::new(Arc::clone(&store)),
            directory: DirectoryService::new(store),
        }
    }
}

/// Connect to Postgres, apply pending migrations and seed the technician
/// roster when enabled.
pub async fn bootstrap(config: &AppConfig) -> AppResult<AppServices<PostgresStore>> {
    log::info!(
        "Connecting to {} (max {} connections)",
        config.database.redacted_url(),
        config.database.max_connections
    );
    let database = Arc::new(Database::new(&config.database)?);

    let migrator = Arc::clone(&database);
    let applied = tokio::task::spawn_blocking(move || migrator.run_migrations()).await??;
    log::info!("Database migrations completed ({} applied)", applied);

    let services = AppServices::new(Arc::new(PostgresStore::new(Arc::clone(&database))));

    if config.seed_technicians {
        let seeded = services.directory.seed_technicians().await?;
        if seeded > 0 {
            log::info!("Seeded {} technicians", seeded);
        }
    }

    let status = database.pool_status();
    log::info!(
        "Pool ready: {} connections ({} idle, max {})",
        status.connections,
        status.idle_connections,
        status.max_size
    );

    Ok(services)
}

pub async fn run() -> AppResult<()> {
    init_logger();

    let config = AppConfig::from_env()?;
    match bootstrap(&config).await {
        Ok(_) => {
            log::info!("Job lifecycle core is ready");
            Ok(())
        }
        Err(e) => {
            LogContext::error_with_context(&e, "bootstrap");
            Err(e)
        }
    }
}
