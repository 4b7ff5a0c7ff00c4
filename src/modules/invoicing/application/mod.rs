pub mod generator;

pub use generator::InvoiceGenerator;
