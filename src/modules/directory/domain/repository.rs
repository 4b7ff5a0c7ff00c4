/// Lookups into the customer and technician directory
///
/// Directory management lives outside the lifecycle core; sagas only need
/// existence checks, plus the inserts used for registration and seeding.
use uuid::Uuid;

use super::entities::{Customer, Technician};
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;

pub trait DirectoryRepository {
    fn find_customer(&mut self, id: Uuid) -> AppResult<Option<Customer>>;

    /// Every customer whose email or phone matches
    fn find_customers_by_contact(&mut self, email: &str, phone: &str)
        -> AppResult<Vec<Customer>>;

    fn insert_customer(&mut self, customer: &Customer) -> AppResult<Customer>;

    fn find_technician(&mut self, id: Uuid) -> AppResult<Option<Technician>>;

    fn insert_technician(&mut self, technician: &Technician) -> AppResult<Technician>;

    fn list_technicians(&mut self, params: &PaginationParams)
        -> AppResult<(Vec<Technician>, u64)>;
}
