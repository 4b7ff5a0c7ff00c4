pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::InvoiceGenerator;
pub use domain::{
    Invoice, InvoiceItem, InvoiceNumberGenerator, InvoiceRepository, InvoiceRequest,
    RandomInvoiceNumberGenerator,
};
