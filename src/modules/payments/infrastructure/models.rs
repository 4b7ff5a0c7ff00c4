use crate::modules::payments::domain::{Payment, PaymentMethodDb};
use crate::schema::payments;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = payments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PaymentModel {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub amount: Decimal,
    pub method: PaymentMethodDb,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentModel> for Payment {
    fn from(model: PaymentModel) -> Self {
        Payment {
            id: model.id,
            invoice_id: model.invoice_id,
            amount: model.amount,
            method: model.method.into(),
            created_at: model.created_at,
        }
    }
}

impl From<&Payment> for PaymentModel {
    fn from(payment: &Payment) -> Self {
        PaymentModel {
            id: payment.id,
            invoice_id: payment.invoice_id,
            amount: payment.amount,
            method: payment.method.into(),
            created_at: payment.created_at,
        }
    }
}
