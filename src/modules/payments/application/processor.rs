use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::jobs::{JobStatus, TransitionPath};
use crate::modules::payments::domain::{Payment, PaymentMethod};
use crate::shared::application::{PaginatedResult, PaginationParams, TransactionManager};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use crate::log_info;

const SAGA: &str = "payment";

/// Settles invoices and closes out their jobs
pub struct PaymentProcessor<S: TransactionManager> {
    store: Arc<S>,
}

impl<S: TransactionManager> Clone for PaymentProcessor<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: TransactionManager> PaymentProcessor<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Record a full payment of `invoice_id` and move its job to `paid`,
    /// all in one transaction
    pub async fn create(
        &self,
        invoice_id: Uuid,
        amount: Decimal,
        method: PaymentMethod,
    ) -> AppResult<Payment> {
        let subject = format!("invoice {}", invoice_id);
        let timer = TimedOperation::new("payment_saga");
        LogContext::saga_started(SAGA, &subject);

        let result = self
            .store
            .transaction(move |tx| {
                let invoice = tx.find_invoice(invoice_id)?.ok_or_else(|| {
                    AppError::NotFound(format!("Invoice with ID {} not found", invoice_id))
                })?;

                if amount != invoice.total {
                    return Err(AppError::BadRequest(format!(
                        "Payment amount ({}) must equal invoice total ({})",
                        amount, invoice.total
                    )));
                }

                let mut job = tx.lock_job(invoice.job_id)?.ok_or_else(|| {
                    AppError::NotFound(format!("Job for invoice {} not found", invoice_id))
                })?;

                if job.status != JobStatus::Invoiced {
                    return Err(AppError::BadRequest(format!(
                        "Payment can only be recorded for jobs with status INVOICED (job {} is {})",
                        job.id, job.status
                    )));
                }

                job.advance(JobStatus::Paid, TransitionPath::Saga)?;
                tx.update_job_status(&job)?;

                tx.insert_payment(&Payment::new(invoice_id, amount, method))
            })
            .await;

        match &result {
            Ok(payment) => {
                LogContext::saga_committed(SAGA, &subject);
                log_info!(
                    "Payment {} of {} by {} recorded for invoice {}",
                    payment.id,
                    payment.amount,
                    payment.method,
                    invoice_id
                );
            }
            Err(err) => LogContext::saga_aborted(SAGA, &subject, err),
        }
        timer.finish();

        result
    }

    pub async fn find_one(&self, id: Uuid) -> AppResult<Payment> {
        self.store
            .execute(move |tx| tx.find_payment(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Payment with ID {} not found", id)))
    }

    pub async fn find_all(&self, page: u32, limit: u32) -> AppResult<PaginatedResult<Payment>> {
        let params = PaginationParams::new(page, limit);
        let (items, total) = self
            .store
            .execute(move |tx| tx.list_payments(&params))
            .await?;
        Ok(PaginatedResult::new(items, total, &params))
    }
}
