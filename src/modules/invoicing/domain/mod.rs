pub mod entities;
pub mod invoice_number;
pub mod repository;

pub use entities::{Invoice, InvoiceItem, InvoiceRequest, InvoiceTotals};
pub use invoice_number::{InvoiceNumberGenerator, RandomInvoiceNumberGenerator};
pub use repository::InvoiceRepository;
