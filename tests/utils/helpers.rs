/// Test helper functions and service builders
use super::factories::{CustomerFactory, InvoiceRequestFactory, TechnicianFactory};
use chrono::Duration;
use jobflow_lib::infrastructure::{InMemoryStore, PostgresStore};
use jobflow_lib::modules::directory::{Customer, Technician};
use jobflow_lib::modules::invoicing::{InvoiceGenerator, InvoiceNumberGenerator};
use jobflow_lib::modules::jobs::{Job, JobStatus};
use jobflow_lib::modules::payments::PaymentMethod;
use jobflow_lib::modules::scheduling::AppointmentRequest;
use jobflow_lib::shared::application::TransactionManager;
use jobflow_lib::shared::Database;
use jobflow_lib::AppServices;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Always hands out the same invoice number
pub struct FixedInvoiceNumbers(pub &'static str);

impl InvoiceNumberGenerator for FixedInvoiceNumbers {
    fn next_number(&self) -> String {
        self.0.to_string()
    }
}

/// Services plus one registered customer and technician
pub struct TestHarness<S: TransactionManager> {
    pub store: Arc<S>,
    pub services: AppServices<S>,
    pub customer: Customer,
    pub technician: Technician,
    next_slot: AtomicI64,
}

pub async fn memory_harness() -> TestHarness<InMemoryStore> {
    build_harness(Arc::new(InMemoryStore::new()), InvoiceGenerator::default()).await
}

pub async fn memory_harness_with_numbers(
    numbers: Arc<dyn InvoiceNumberGenerator>,
) -> TestHarness<InMemoryStore> {
    build_harness(Arc::new(InMemoryStore::new()), InvoiceGenerator::new(numbers)).await
}

pub async fn postgres_harness(database: Arc<Database>) -> TestHarness<PostgresStore> {
    build_harness(
        Arc::new(PostgresStore::new(database)),
        InvoiceGenerator::default(),
    )
    .await
}

pub async fn build_harness<S: TransactionManager>(
    store: Arc<S>,
    invoices: InvoiceGenerator,
) -> TestHarness<S> {
    let services = AppServices::with_invoice_generator(Arc::clone(&store), invoices);

    let customer = CustomerFactory::new();
    let customer = services
        .directory
        .register_customer(customer.name, customer.email, customer.phone, customer.address)
        .await
        .expect("Failed to register test customer");

    let technician = TechnicianFactory::new();
    let technician = services
        .directory
        .register_technician(technician.name, technician.email, technician.phone)
        .await
        .expect("Failed to register test technician");

    TestHarness {
        store,
        services,
        customer,
        technician,
        next_slot: AtomicI64::new(0),
    }
}

impl<S: TransactionManager> TestHarness<S> {
    pub async fn new_job(&self, title: &str) -> Job {
        self.services
            .jobs
            .create(self.customer.id, title.to_string(), "Test job".to_string())
            .await
            .expect("Failed to create job")
    }

    /// Next free two hour slot for the harness technician. Slots start in
    /// February so they never collide with windows a test books explicitly
    /// on January 1st.
    pub fn next_window(&self, job_id: uuid::Uuid) -> AppointmentRequest {
        let slot = self.next_slot.fetch_add(1, Ordering::SeqCst);
        let start = super::factories::jan_first(0) + Duration::days(31) + Duration::hours(2 * slot);
        AppointmentRequest::new(job_id, self.technician.id, start, start + Duration::hours(2))
    }

    /// Create a job and drive it forward until it reaches `target`
    pub async fn job_in_status(&self, title: &str, target: JobStatus) -> Job {
        let job = self.new_job(title).await;
        let jobs = &self.services.jobs;

        let mut current = job.status;
        while current != target {
            let next = *current
                .allowed_next()
                .first()
                .expect("Target status is not reachable");
            match next {
                JobStatus::Scheduled => {
                    jobs.schedule_appointment(self.next_window(job.id))
                        .await
                        .expect("Failed to schedule");
                }
                JobStatus::InProgress | JobStatus::Done => {
                    jobs.update_status(job.id, next.as_str())
                        .await
                        .expect("Failed to update status");
                }
                JobStatus::Invoiced => {
                    jobs.create_invoice(job.id, InvoiceRequestFactory::new().build())
                        .await
                        .expect("Failed to invoice");
                }
                JobStatus::Paid => {
                    let invoice = jobs
                        .list_invoices(Some(job.id), 1, 1)
                        .await
                        .expect("Failed to list invoices")
                        .items
                        .remove(0);
                    self.services
                        .payments
                        .create(invoice.id, invoice.total, PaymentMethod::Bank)
                        .await
                        .expect("Failed to pay");
                }
                JobStatus::New => unreachable!("no edge leads back to new"),
            }
            current = next;
        }

        self.job(job.id).await
    }

    pub async fn job(&self, id: uuid::Uuid) -> Job {
        self.services
            .jobs
            .find_one(&id.to_string())
            .await
            .expect("Job should exist")
    }
}
