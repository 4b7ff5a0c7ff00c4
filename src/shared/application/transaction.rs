//! Explicit transaction context shared by the lifecycle sagas.
//!
//! A saga opens exactly one unit of work through [`TransactionManager::transaction`]
//! and hands the resulting `&mut dyn TransactionContext` to every component that
//! participates. Components never open transactions of their own.
use async_trait::async_trait;

use crate::modules::directory::DirectoryRepository;
use crate::modules::invoicing::InvoiceRepository;
use crate::modules::jobs::JobRepository;
use crate::modules::payments::PaymentRepository;
use crate::modules::scheduling::AppointmentRepository;
use crate::shared::errors::AppResult;

/// Handle to an open unit of work: every record collection, same snapshot.
pub trait TransactionContext:
    JobRepository + AppointmentRepository + InvoiceRepository + PaymentRepository + DirectoryRepository
{
}

impl<T> TransactionContext for T where
    T: JobRepository
        + AppointmentRepository
        + InvoiceRepository
        + PaymentRepository
        + DirectoryRepository
{
}

#[async_trait]
pub trait TransactionManager: Send + Sync + 'static {
    /// Run `work` atomically. `Ok` commits; `Err` rolls back every write made
    /// through the context and is returned to the caller unchanged.
    async fn transaction<T, F>(&self, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn TransactionContext) -> AppResult<T> + Send + 'static;

    /// Run `work` without an enclosing transaction (each statement autocommits).
    async fn execute<T, F>(&self, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn TransactionContext) -> AppResult<T> + Send + 'static;
}
