use std::sync::Arc;

use uuid::Uuid;

use crate::modules::invoicing::{Invoice, InvoiceGenerator, InvoiceRequest};
use crate::modules::jobs::domain::{Job, JobFilter, JobStatus, TransitionPath};
use crate::modules::scheduling::{Appointment, AppointmentRequest, AppointmentScheduler};
use crate::shared::application::{PaginatedResult, PaginationParams, TransactionManager};
use crate::shared::errors::{constraints, AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation, Validator};
use crate::{log_debug, log_info};

/// Entry point for everything that happens to a job.
///
/// Owns the scheduling and invoicing sagas: each opens one transaction on the
/// store, checks the job's preconditions inside it and hands the same context
/// to the collaborator that performs the write.
pub struct JobLifecycleManager<S: TransactionManager> {
    store: Arc<S>,
    scheduler: AppointmentScheduler,
    invoices: InvoiceGenerator,
}

impl<S: TransactionManager> Clone for JobLifecycleManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            scheduler: self.scheduler,
            invoices: self.invoices.clone(),
        }
    }
}

fn job_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Job with ID {} not found", id))
}

impl<S: TransactionManager> JobLifecycleManager<S> {
    pub fn new(store: Arc<S>, scheduler: AppointmentScheduler, invoices: InvoiceGenerator) -> Self {
        Self {
            store,
            scheduler,
            invoices,
        }
    }

    pub async fn create(
        &self,
        customer_id: Uuid,
        title: String,
        description: String,
    ) -> AppResult<Job> {
        Validator::validate_job_title(&title)?;

        let job = Job::new(customer_id, title, description);
        let created = self
            .store
            .execute(move |tx| {
                tx.find_customer(job.customer_id)?
                    .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

                // Same title for the same customer is a duplicate job
                if tx.find_job_by_title(job.customer_id, &job.title)?.is_some() {
                    return Err(AppError::Conflict(
                        constraints::conflict_message(constraints::JOB_TITLE_PER_CUSTOMER)
                            .unwrap_or("Duplicate job")
                            .to_string(),
                    ));
                }

                tx.insert_job(&job)
            })
            .await?;

        log_info!(
            "Created job {} '{}' for customer {}",
            created.id,
            created.title,
            created.customer_id
        );
        Ok(created)
    }

    /// Newest first, optionally restricted to one status
    pub async fn find_all(
        &self,
        status: Option<JobStatus>,
        page: u32,
        limit: u32,
    ) -> AppResult<PaginatedResult<Job>> {
        let params = PaginationParams::new(page, limit);
        let filter = JobFilter { status };
        let (items, total) = self
            .store
            .execute(move |tx| tx.list_jobs(&filter, &params))
            .await?;
        Ok(PaginatedResult::new(items, total, &params))
    }

    /// A malformed id and an unknown id are both NotFound
    pub async fn find_one(&self, id: &str) -> AppResult<Job> {
        let job_id = Uuid::parse_str(id.trim())
            .map_err(|_| AppError::NotFound(format!("Invalid job ID: {}", id)))?;

        self.store
            .execute(move |tx| tx.find_job(job_id))
            .await?
            .ok_or_else(|| job_not_found(job_id))
    }

    /// Direct status edit, limited to `scheduled → in_progress` and
    /// `in_progress → done`
    pub async fn update_status(&self, job_id: Uuid, target: &str) -> AppResult<Job> {
        let target: JobStatus = target.parse()?;

        let updated = self
            .store
            .transaction(move |tx| {
                let mut job = tx.lock_job(job_id)?.ok_or_else(|| job_not_found(job_id))?;
                job.advance(target, TransitionPath::Direct)?;
                tx.update_job_status(&job)
            })
            .await?;

        log_info!("Job {} moved to {}", updated.id, updated.status);
        Ok(updated)
    }

    /// Book a technician for a NEW job and move it to `scheduled`
    pub async fn schedule_appointment(&self, request: AppointmentRequest) -> AppResult<Appointment> {
        request.validate_window()?;

        let subject = format!("job {}", request.job_id);
        let timer = TimedOperation::new("scheduling_saga");
        LogContext::saga_started("scheduling", &subject);

        let scheduler = self.scheduler;
        let result = self
            .store
            .transaction(move |tx| scheduler.schedule(tx, &request))
            .await;

        let outcome = match result {
            Ok((appointment, job)) => {
                LogContext::saga_committed("scheduling", &subject);
                log_debug!(
                    "Job {} is {} with appointment {}",
                    job.id,
                    job.status,
                    appointment.id
                );
                Ok(appointment)
            }
            Err(err) => {
                LogContext::saga_aborted("scheduling", &subject, &err);
                Err(err)
            }
        };
        timer.finish();
        outcome
    }

    /// Invoice a DONE job and move it to `invoiced`
    pub async fn create_invoice(&self, job_id: Uuid, request: InvoiceRequest) -> AppResult<Invoice> {
        request.validate()?;

        let subject = format!("job {}", job_id);
        let timer = TimedOperation::new("invoicing_saga");
        LogContext::saga_started("invoicing", &subject);

        let invoices = self.invoices.clone();
        let result = self
            .store
            .transaction(move |tx| {
                let mut job = tx.lock_job(job_id)?.ok_or_else(|| job_not_found(job_id))?;

                if job.status != JobStatus::Done {
                    return Err(AppError::BadRequest(format!(
                        "Invoice can only be created for jobs with status DONE (job {} is {})",
                        job.id, job.status
                    )));
                }

                job.advance(JobStatus::Invoiced, TransitionPath::Saga)?;
                tx.update_job_status(&job)?;

                invoices.create_invoice(tx, job.id, request)
            })
            .await;

        match &result {
            Ok(invoice) => {
                LogContext::saga_committed("invoicing", &subject);
                log_info!(
                    "Invoice {} issued for job {} (total {})",
                    invoice.invoice_number,
                    job_id,
                    invoice.total
                );
            }
            Err(err) => LogContext::saga_aborted("invoicing", &subject, err),
        }
        timer.finish();
        result
    }

    pub async fn appointment_for_job(&self, job_id: Uuid) -> AppResult<Option<Appointment>> {
        self.store
            .execute(move |tx| tx.find_appointment_for_job(job_id))
            .await
    }

    pub async fn find_invoice(&self, id: Uuid) -> AppResult<Invoice> {
        let invoices = self.invoices.clone();
        self.store
            .execute(move |tx| invoices.find_one(tx, id))
            .await
    }

    pub async fn list_invoices(
        &self,
        job_id: Option<Uuid>,
        page: u32,
        limit: u32,
    ) -> AppResult<PaginatedResult<Invoice>> {
        let invoices = self.invoices.clone();
        let params = PaginationParams::new(page, limit);
        self.store
            .execute(move |tx| invoices.find_all(tx, job_id, params))
            .await
    }
}
