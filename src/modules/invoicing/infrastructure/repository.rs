use diesel::prelude::*;
use uuid::Uuid;

use super::models::InvoiceModel;
use crate::infrastructure::postgres::PgContext;
use crate::modules::invoicing::domain::{Invoice, InvoiceRepository};
use crate::schema::invoices;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;

impl InvoiceRepository for PgContext<'_> {
    fn insert_invoice(&mut self, invoice: &Invoice) -> AppResult<Invoice> {
        let inserted: InvoiceModel = diesel::insert_into(invoices::table)
            .values(InvoiceModel::from_invoice(invoice)?)
            .returning(InvoiceModel::as_returning())
            .get_result(self.conn())?;

        inserted.into_invoice()
    }

    fn find_invoice(&mut self, id: Uuid) -> AppResult<Option<Invoice>> {
        let invoice: Option<InvoiceModel> = invoices::table
            .find(id)
            .select(InvoiceModel::as_select())
            .first(self.conn())
            .optional()?;

        invoice.map(InvoiceModel::into_invoice).transpose()
    }

    fn list_invoices(
        &mut self,
        job_id: Option<Uuid>,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Invoice>, u64)> {
        let mut query = invoices::table.select(InvoiceModel::as_select()).into_boxed();
        let mut count_query = invoices::table.count().into_boxed();

        if let Some(job_id) = job_id {
            query = query.filter(invoices::job_id.eq(job_id));
            count_query = count_query.filter(invoices::job_id.eq(job_id));
        }

        let rows: Vec<InvoiceModel> = query
            .order((invoices::created_at.desc(), invoices::id.desc()))
            .offset(params.offset())
            .limit(params.limit())
            .load(self.conn())?;
        let total: i64 = count_query.get_result(self.conn())?;

        let invoices = rows
            .into_iter()
            .map(InvoiceModel::into_invoice)
            .collect::<AppResult<Vec<_>>>()?;
        Ok((invoices, total as u64))
    }
}
