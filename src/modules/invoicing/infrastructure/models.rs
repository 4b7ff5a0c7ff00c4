/// Diesel model for the invoices table; items are kept as an ordered JSONB array
use crate::modules::invoicing::domain::{Invoice, InvoiceItem};
use crate::schema::invoices;
use crate::shared::errors::AppResult;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InvoiceModel {
    pub id: Uuid,
    pub job_id: Uuid,
    pub invoice_number: String,
    pub items: JsonValue,
    pub sub_total: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

impl InvoiceModel {
    pub fn from_invoice(invoice: &Invoice) -> AppResult<Self> {
        Ok(InvoiceModel {
            id: invoice.id,
            job_id: invoice.job_id,
            invoice_number: invoice.invoice_number.clone(),
            items: serde_json::to_value(&invoice.items)?,
            sub_total: invoice.sub_total,
            tax: invoice.tax,
            total: invoice.total,
            created_at: invoice.created_at,
        })
    }

    pub fn into_invoice(self) -> AppResult<Invoice> {
        let items: Vec<InvoiceItem> = serde_json::from_value(self.items)?;
        Ok(Invoice {
            id: self.id,
            job_id: self.job_id,
            invoice_number: self.invoice_number,
            items,
            sub_total: self.sub_total,
            tax: self.tax,
            total: self.total,
            created_at: self.created_at,
        })
    }
}
