/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults.
/// Emails and phone numbers are randomized so factories never collide on the
/// directory's unique constraints.
use chrono::{DateTime, TimeZone, Utc};
use jobflow_lib::modules::invoicing::{InvoiceItem, InvoiceRequest};
use rust_decimal::Decimal;
use uuid::Uuid;

fn unique_phone() -> String {
    format!("080{:08}", rand::random::<u32>() % 100_000_000)
}

pub struct CustomerFactory {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for CustomerFactory {
    fn default() -> Self {
        Self {
            name: "Test Customer".to_string(),
            email: format!("customer-{}@example.com", Uuid::new_v4().simple()),
            phone: unique_phone(),
            address: "12 Marina Rd, Lagos".to_string(),
        }
    }
}

impl CustomerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }
}

pub struct TechnicianFactory {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for TechnicianFactory {
    fn default() -> Self {
        Self {
            name: "Test Technician".to_string(),
            email: format!("tech-{}@example.com", Uuid::new_v4().simple()),
            phone: unique_phone(),
        }
    }
}

impl TechnicianFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

pub struct InvoiceRequestFactory {
    items: Vec<InvoiceItem>,
    tax: Decimal,
}

impl Default for InvoiceRequestFactory {
    /// The reference invoice: 2000 x 1 + 1500 x 2 at 10% tax
    fn default() -> Self {
        Self {
            items: vec![
                InvoiceItem::new("Oil change", Decimal::from(2000), 1),
                InvoiceItem::new("Filter replacement", Decimal::from(1500), 2),
            ],
            tax: Decimal::from(10),
        }
    }
}

impl InvoiceRequestFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, items: Vec<InvoiceItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_tax(mut self, tax: Decimal) -> Self {
        self.tax = tax;
        self
    }

    pub fn build(self) -> InvoiceRequest {
        InvoiceRequest {
            items: self.items,
            tax: self.tax,
        }
    }
}

/// 2025-01-01 at `hour`:00 UTC
pub fn jan_first(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, hour, 0, 0).unwrap()
}
