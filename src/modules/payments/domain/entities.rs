use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::PaymentMethod;

/// Full settlement of one invoice; partial payments do not exist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(invoice_id: Uuid, amount: Decimal, method: PaymentMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            invoice_id,
            amount,
            method,
            created_at: Utc::now(),
        }
    }
}
