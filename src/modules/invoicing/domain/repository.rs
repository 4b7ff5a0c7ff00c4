use uuid::Uuid;

use super::entities::Invoice;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;

pub trait InvoiceRepository {
    fn insert_invoice(&mut self, invoice: &Invoice) -> AppResult<Invoice>;

    fn find_invoice(&mut self, id: Uuid) -> AppResult<Option<Invoice>>;

    /// Newest first, optionally restricted to one job
    fn list_invoices(
        &mut self,
        job_id: Option<Uuid>,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Invoice>, u64)>;
}
