//! Storage-level uniqueness and exclusion constraints.
//!
//! Names match the constraints declared in `migrations/`; the in-memory store
//! reports violations with the same messages so callers see one vocabulary.

pub const JOB_TITLE_PER_CUSTOMER: &str = "jobs_customer_id_title_key";
pub const INVOICE_NUMBER_UNIQUE: &str = "invoices_invoice_number_key";
pub const INVOICE_PER_JOB: &str = "invoices_job_id_key";
pub const PAYMENT_PER_INVOICE: &str = "payments_invoice_id_key";
pub const TECHNICIAN_NO_OVERLAP: &str = "appointments_technician_no_overlap";
pub const CUSTOMER_EMAIL_UNIQUE: &str = "customers_email_key";
pub const CUSTOMER_PHONE_UNIQUE: &str = "customers_phone_key";
pub const TECHNICIAN_EMAIL_UNIQUE: &str = "technicians_email_key";

pub fn conflict_message(constraint: &str) -> Option<&'static str> {
    let message = match constraint {
        JOB_TITLE_PER_CUSTOMER => "A job with this title already exists for the customer",
        INVOICE_NUMBER_UNIQUE => "Invoice number already issued",
        INVOICE_PER_JOB => "An invoice already exists for this job",
        PAYMENT_PER_INVOICE => "A payment has already been recorded for this invoice",
        TECHNICIAN_NO_OVERLAP => {
            "Technician already has an active appointment during this time frame"
        }
        CUSTOMER_EMAIL_UNIQUE => "Customer with this email already exists.",
        CUSTOMER_PHONE_UNIQUE => "Customer with this phone number already exists.",
        TECHNICIAN_EMAIL_UNIQUE => "Technician with this email already exists.",
        _ => return None,
    };
    Some(message)
}
