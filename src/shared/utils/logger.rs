use log::{debug, error, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("jobflow_lib", log::LevelFilter::Debug)
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_default_env() // RUST_LOG wins over the defaults above
            .format_timestamp_millis()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// One unit of work against a store, committed or rolled back
    pub fn db_transaction(store: &str, isolation: &str, duration_ms: u64, committed: bool) {
        if committed {
            debug!("DB: {} {} transaction committed in {}ms", store, isolation, duration_ms);
        } else {
            debug!("DB: {} {} transaction rolled back after {}ms", store, isolation, duration_ms);
        }
    }

    pub fn saga_started(saga: &str, subject: &str) {
        debug!("Saga: {} started for {}", saga, subject);
    }

    pub fn saga_committed(saga: &str, subject: &str) {
        info!("Saga: {} committed for {}", saga, subject);
    }

    /// Aborts caused by caller errors are expected traffic; storage failures are not
    pub fn saga_aborted(saga: &str, subject: &str, err: &crate::shared::errors::AppError) {
        use crate::shared::errors::ErrorKind;

        match err.kind() {
            ErrorKind::Internal => error!("Saga: {} aborted for {}: {}", saga, subject, err),
            _ => warn!("Saga: {} aborted for {}: {}", saga, subject, err),
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish(self) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::performance_metric(&self.operation, duration, None);
        duration
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
