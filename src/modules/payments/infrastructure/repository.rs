use diesel::prelude::*;
use uuid::Uuid;

use super::models::PaymentModel;
use crate::infrastructure::postgres::PgContext;
use crate::modules::payments::domain::{Payment, PaymentRepository};
use crate::schema::payments;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;

impl PaymentRepository for PgContext<'_> {
    fn insert_payment(&mut self, payment: &Payment) -> AppResult<Payment> {
        let inserted: PaymentModel = diesel::insert_into(payments::table)
            .values(PaymentModel::from(payment))
            .returning(PaymentModel::as_returning())
            .get_result(self.conn())?;

        Ok(inserted.into())
    }

    fn find_payment(&mut self, id: Uuid) -> AppResult<Option<Payment>> {
        let payment: Option<PaymentModel> = payments::table
            .find(id)
            .select(PaymentModel::as_select())
            .first(self.conn())
            .optional()?;

        Ok(payment.map(Payment::from))
    }

    fn list_payments(&mut self, params: &PaginationParams) -> AppResult<(Vec<Payment>, u64)> {
        let rows: Vec<PaymentModel> = payments::table
            .select(PaymentModel::as_select())
            .order((payments::created_at.desc(), payments::id.desc()))
            .offset(params.offset())
            .limit(params.limit())
            .load(self.conn())?;
        let total: i64 = payments::table.count().get_result(self.conn())?;

        Ok((rows.into_iter().map(Payment::from).collect(), total as u64))
    }
}
