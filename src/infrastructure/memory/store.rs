//! In-memory store (embedded use and tests).
//!
//! All tables sit behind one async mutex. A transaction clones the tables,
//! runs against the copy and swaps it in only on success, so transactions are
//! fully serialized and an aborted unit of work leaves no trace. Uniqueness and
//! exclusion constraints mirror the Postgres schema and report the same
//! messages; referential integrity is not enforced.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::directory::{Customer, DirectoryRepository, Technician};
use crate::modules::invoicing::{Invoice, InvoiceRepository};
use crate::modules::jobs::{Job, JobFilter, JobRepository};
use crate::modules::payments::{Payment, PaymentRepository};
use crate::modules::scheduling::{Appointment, AppointmentRepository};
use crate::shared::application::{PaginationParams, TransactionContext, TransactionManager};
use crate::shared::errors::constraints::{self, conflict_message};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

#[derive(Debug, Clone, Default)]
pub struct MemoryTables {
    jobs: HashMap<Uuid, Job>,
    appointments: Vec<Appointment>,
    invoices: HashMap<Uuid, Invoice>,
    payments: HashMap<Uuid, Payment>,
    customers: HashMap<Uuid, Customer>,
    technicians: HashMap<Uuid, Technician>,
}

fn conflict(constraint: &str) -> AppError {
    AppError::Conflict(
        conflict_message(constraint)
            .unwrap_or("Duplicate record")
            .to_string(),
    )
}

/// Newest first, then slice out the requested page
fn paginate<T: Clone>(
    mut rows: Vec<T>,
    params: &PaginationParams,
    key: impl Fn(&T) -> (DateTime<Utc>, Uuid),
) -> (Vec<T>, u64) {
    rows.sort_by_key(|row| std::cmp::Reverse(key(row)));
    let total = rows.len() as u64;
    let page = rows
        .into_iter()
        .skip(params.offset() as usize)
        .take(params.limit() as usize)
        .collect();
    (page, total)
}

impl MemoryTables {
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn invoices(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices.values()
    }

    pub fn payments(&self) -> impl Iterator<Item = &Payment> {
        self.payments.values()
    }
}

impl JobRepository for MemoryTables {
    fn find_job(&mut self, id: Uuid) -> AppResult<Option<Job>> {
        Ok(self.jobs.get(&id).cloned())
    }

    fn lock_job(&mut self, id: Uuid) -> AppResult<Option<Job>> {
        // The store-wide mutex already serializes transactions
        self.find_job(id)
    }

    fn find_job_by_title(&mut self, customer_id: Uuid, title: &str) -> AppResult<Option<Job>> {
        Ok(self
            .jobs
            .values()
            .find(|job| job.customer_id == customer_id && job.title == title)
            .cloned())
    }

    fn insert_job(&mut self, job: &Job) -> AppResult<Job> {
        if self.find_job_by_title(job.customer_id, &job.title)?.is_some() {
            return Err(conflict(constraints::JOB_TITLE_PER_CUSTOMER));
        }
        self.jobs.insert(job.id, job.clone());
        Ok(job.clone())
    }

    fn update_job_status(&mut self, job: &Job) -> AppResult<Job> {
        let stored = self
            .jobs
            .get_mut(&job.id)
            .ok_or_else(|| AppError::NotFound("Record not found in database".to_string()))?;
        stored.status = job.status;
        stored.updated_at = job.updated_at;
        Ok(stored.clone())
    }

    fn list_jobs(
        &mut self,
        filter: &JobFilter,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Job>, u64)> {
        let rows: Vec<Job> = self
            .jobs
            .values()
            .filter(|job| filter.status.map_or(true, |status| job.status == status))
            .cloned()
            .collect();
        Ok(paginate(rows, params, |job| (job.created_at, job.id)))
    }
}

impl AppointmentRepository for MemoryTables {
    fn find_overlapping_appointment(
        &mut self,
        technician_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Option<Appointment>> {
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.technician_id == technician_id && a.overlaps(start, end))
            .min_by_key(|a| a.start_time)
            .cloned())
    }

    fn insert_appointment(&mut self, appointment: &Appointment) -> AppResult<Appointment> {
        if appointment.end_time <= appointment.start_time {
            return Err(AppError::DatabaseError(
                "new row for relation \"appointments\" violates check constraint \"appointments_window_check\""
                    .to_string(),
            ));
        }
        let clash = self.find_overlapping_appointment(
            appointment.technician_id,
            appointment.start_time,
            appointment.end_time,
        )?;
        if clash.is_some() {
            return Err(conflict(constraints::TECHNICIAN_NO_OVERLAP));
        }
        self.appointments.push(appointment.clone());
        Ok(appointment.clone())
    }

    fn find_appointment_for_job(&mut self, job_id: Uuid) -> AppResult<Option<Appointment>> {
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.job_id == job_id)
            .max_by_key(|a| a.created_at)
            .cloned())
    }
}

impl InvoiceRepository for MemoryTables {
    fn insert_invoice(&mut self, invoice: &Invoice) -> AppResult<Invoice> {
        if self
            .invoices
            .values()
            .any(|existing| existing.invoice_number == invoice.invoice_number)
        {
            return Err(conflict(constraints::INVOICE_NUMBER_UNIQUE));
        }
        if self.invoices.values().any(|existing| existing.job_id == invoice.job_id) {
            return Err(conflict(constraints::INVOICE_PER_JOB));
        }
        self.invoices.insert(invoice.id, invoice.clone());
        Ok(invoice.clone())
    }

    fn find_invoice(&mut self, id: Uuid) -> AppResult<Option<Invoice>> {
        Ok(self.invoices.get(&id).cloned())
    }

    fn list_invoices(
        &mut self,
        job_id: Option<Uuid>,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Invoice>, u64)> {
        let rows: Vec<Invoice> = self
            .invoices
            .values()
            .filter(|invoice| job_id.map_or(true, |id| invoice.job_id == id))
            .cloned()
            .collect();
        Ok(paginate(rows, params, |invoice| (invoice.created_at, invoice.id)))
    }
}

impl PaymentRepository for MemoryTables {
    fn insert_payment(&mut self, payment: &Payment) -> AppResult<Payment> {
        if self
            .payments
            .values()
            .any(|existing| existing.invoice_id == payment.invoice_id)
        {
            return Err(conflict(constraints::PAYMENT_PER_INVOICE));
        }
        self.payments.insert(payment.id, payment.clone());
        Ok(payment.clone())
    }

    fn find_payment(&mut self, id: Uuid) -> AppResult<Option<Payment>> {
        Ok(self.payments.get(&id).cloned())
    }

    fn list_payments(&mut self, params: &PaginationParams) -> AppResult<(Vec<Payment>, u64)> {
        let rows: Vec<Payment> = self.payments.values().cloned().collect();
        Ok(paginate(rows, params, |payment| (payment.created_at, payment.id)))
    }
}

impl DirectoryRepository for MemoryTables {
    fn find_customer(&mut self, id: Uuid) -> AppResult<Option<Customer>> {
        Ok(self.customers.get(&id).cloned())
    }

    fn find_customers_by_contact(
        &mut self,
        email: &str,
        phone: &str,
    ) -> AppResult<Vec<Customer>> {
        Ok(self
            .customers
            .values()
            .filter(|c| c.email == email || c.phone == phone)
            .cloned()
            .collect())
    }

    fn insert_customer(&mut self, customer: &Customer) -> AppResult<Customer> {
        if self.customers.values().any(|c| c.email == customer.email) {
            return Err(conflict(constraints::CUSTOMER_EMAIL_UNIQUE));
        }
        if self.customers.values().any(|c| c.phone == customer.phone) {
            return Err(conflict(constraints::CUSTOMER_PHONE_UNIQUE));
        }
        self.customers.insert(customer.id, customer.clone());
        Ok(customer.clone())
    }

    fn find_technician(&mut self, id: Uuid) -> AppResult<Option<Technician>> {
        Ok(self.technicians.get(&id).cloned())
    }

    fn insert_technician(&mut self, technician: &Technician) -> AppResult<Technician> {
        if self.technicians.values().any(|t| t.email == technician.email) {
            return Err(conflict(constraints::TECHNICIAN_EMAIL_UNIQUE));
        }
        self.technicians.insert(technician.id, technician.clone());
        Ok(technician.clone())
    }

    fn list_technicians(
        &mut self,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Technician>, u64)> {
        let mut rows: Vec<Technician> = self.technicians.values().cloned().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        let total = rows.len() as u64;
        let page = rows
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .collect();
        Ok((page, total))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<MemoryTables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the committed state
    pub async fn snapshot(&self) -> MemoryTables {
        self.tables.lock().await.clone()
    }
}

#[async_trait]
impl TransactionManager for InMemoryStore {
    async fn transaction<T, F>(&self, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn TransactionContext) -> AppResult<T> + Send + 'static,
    {
        let mut live = self.tables.lock().await;
        let start = std::time::Instant::now();
        let mut staged = live.clone();

        let result = work(&mut staged);
        if result.is_ok() {
            *live = staged;
        }
        LogContext::db_transaction(
            "in-memory",
            "serialized",
            start.elapsed().as_millis() as u64,
            result.is_ok(),
        );
        result
    }

    async fn execute<T, F>(&self, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn TransactionContext) -> AppResult<T> + Send + 'static,
    {
        let mut live = self.tables.lock().await;
        work(&mut *live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn customer() -> Customer {
        Customer::new(
            "Ada".into(),
            "ada@example.com".into(),
            "08000000000".into(),
            "1 Main St".into(),
        )
    }

    #[tokio::test]
    async fn test_transaction_rolls_back_on_error() {
        let store = InMemoryStore::new();
        let job = Job::new(Uuid::new_v4(), "AC repair".into(), "Split unit".into());

        let result: AppResult<()> = store
            .transaction(move |tx| {
                tx.insert_job(&job)?;
                Err(AppError::BadRequest("abort".into()))
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(store.snapshot().await.jobs().count(), 0);
    }

    #[tokio::test]
    async fn test_transaction_commits_on_success() {
        let store = InMemoryStore::new();
        let job = Job::new(Uuid::new_v4(), "AC repair".into(), "Split unit".into());
        let id = job.id;

        store.transaction(move |tx| tx.insert_job(&job)).await.unwrap();

        let found = store.execute(move |tx| tx.find_job(id)).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_job_title_unique_per_customer() {
        let store = InMemoryStore::new();
        let customer_id = Uuid::new_v4();
        let first = Job::new(customer_id, "AC repair".into(), "a".into());
        let second = Job::new(customer_id, "AC repair".into(), "b".into());
        let other_customer = Job::new(Uuid::new_v4(), "AC repair".into(), "c".into());

        store.execute(move |tx| tx.insert_job(&first)).await.unwrap();
        let err = store.execute(move |tx| tx.insert_job(&second)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        store
            .execute(move |tx| tx.insert_job(&other_customer))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_appointment_exclusion() {
        let store = InMemoryStore::new();
        let technician = Uuid::new_v4();
        let at = |h| Utc.with_ymd_and_hms(2025, 1, 1, h, 0, 0).unwrap();
        let mk = |start, end| Appointment {
            id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            technician_id: technician,
            start_time: at(start),
            end_time: at(end),
            created_at: Utc::now(),
        };

        let (a, b, c) = (mk(9, 11), mk(10, 12), mk(11, 12));
        store.execute(move |tx| tx.insert_appointment(&a)).await.unwrap();
        let err = store
            .execute(move |tx| tx.insert_appointment(&b))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        store.execute(move |tx| tx.insert_appointment(&c)).await.unwrap();
    }

    #[tokio::test]
    async fn test_customer_contact_uniqueness() {
        let store = InMemoryStore::new();
        let first = customer();
        let same_email = Customer {
            id: Uuid::new_v4(),
            phone: "08099999999".into(),
            ..customer()
        };

        store.execute(move |tx| tx.insert_customer(&first)).await.unwrap();
        let err = store
            .execute(move |tx| tx.insert_customer(&same_email))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Customer with this email already exists.");
    }

    #[tokio::test]
    async fn test_list_jobs_newest_first() {
        let store = InMemoryStore::new();
        let customer_id = Uuid::new_v4();
        let mut older = Job::new(customer_id, "older".into(), "d".into());
        older.created_at = Utc::now() - chrono::Duration::hours(1);
        let newer = Job::new(customer_id, "newer".into(), "d".into());

        store
            .execute(move |tx| {
                tx.insert_job(&older)?;
                tx.insert_job(&newer)
            })
            .await
            .unwrap();

        let (jobs, total) = store
            .execute(|tx| tx.list_jobs(&JobFilter::default(), &PaginationParams::new(1, 10)))
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert_eq!(jobs[0].title, "newer");
        assert_eq!(jobs[1].title, "older");
    }
}
