use uuid::Uuid;

use super::entities::Payment;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;

pub trait PaymentRepository {
    fn insert_payment(&mut self, payment: &Payment) -> AppResult<Payment>;

    fn find_payment(&mut self, id: Uuid) -> AppResult<Option<Payment>>;

    fn list_payments(&mut self, params: &PaginationParams) -> AppResult<(Vec<Payment>, u64)>;
}
