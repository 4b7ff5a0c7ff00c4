use std::sync::Arc;

use uuid::Uuid;

use crate::modules::invoicing::domain::{
    Invoice, InvoiceNumberGenerator, InvoiceRequest, RandomInvoiceNumberGenerator,
};
use crate::shared::application::{PaginatedResult, PaginationParams, TransactionContext};
use crate::shared::errors::{AppError, AppResult};
use crate::log_debug;

/// Prices and persists invoices.
///
/// `create_invoice` only ever runs inside the invoicing saga's transaction;
/// the read paths take a context so they can share it as well.
#[derive(Clone)]
pub struct InvoiceGenerator {
    numbers: Arc<dyn InvoiceNumberGenerator>,
}

impl Default for InvoiceGenerator {
    fn default() -> Self {
        Self::new(Arc::new(RandomInvoiceNumberGenerator))
    }
}

impl InvoiceGenerator {
    pub fn new(numbers: Arc<dyn InvoiceNumberGenerator>) -> Self {
        Self { numbers }
    }

    pub fn create_invoice(
        &self,
        tx: &mut dyn TransactionContext,
        job_id: Uuid,
        request: InvoiceRequest,
    ) -> AppResult<Invoice> {
        request.validate()?;

        let invoice = Invoice::new(job_id, self.numbers.next_number(), request)?;
        log_debug!(
            "Pricing invoice {} for job {}: subTotal={}, tax={}%, total={}",
            invoice.invoice_number,
            job_id,
            invoice.sub_total,
            invoice.tax,
            invoice.total
        );

        tx.insert_invoice(&invoice)
    }

    pub fn find_one(&self, tx: &mut dyn TransactionContext, id: Uuid) -> AppResult<Invoice> {
        tx.find_invoice(id)?
            .ok_or_else(|| AppError::NotFound(format!("Invoice with ID {} not found", id)))
    }

    pub fn find_all(
        &self,
        tx: &mut dyn TransactionContext,
        job_id: Option<Uuid>,
        params: PaginationParams,
    ) -> AppResult<PaginatedResult<Invoice>> {
        let (items, total) = tx.list_invoices(job_id, &params)?;
        Ok(PaginatedResult::new(items, total, &params))
    }
}
