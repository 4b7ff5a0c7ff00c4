use diesel::prelude::*;
use uuid::Uuid;

use super::models::{CustomerModel, TechnicianModel};
use crate::infrastructure::postgres::PgContext;
use crate::modules::directory::domain::{Customer, DirectoryRepository, Technician};
use crate::schema::{customers, technicians};
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;

impl DirectoryRepository for PgContext<'_> {
    fn find_customer(&mut self, id: Uuid) -> AppResult<Option<Customer>> {
        let customer: Option<CustomerModel> = customers::table
            .find(id)
            .select(CustomerModel::as_select())
            .first(self.conn())
            .optional()?;

        Ok(customer.map(Customer::from))
    }

    fn find_customers_by_contact(
        &mut self,
        email: &str,
        phone: &str,
    ) -> AppResult<Vec<Customer>> {
        let matches: Vec<CustomerModel> = customers::table
            .filter(customers::email.eq(email).or(customers::phone.eq(phone)))
            .select(CustomerModel::as_select())
            .load(self.conn())?;

        Ok(matches.into_iter().map(Customer::from).collect())
    }

    fn insert_customer(&mut self, customer: &Customer) -> AppResult<Customer> {
        let inserted: CustomerModel = diesel::insert_into(customers::table)
            .values(CustomerModel::from(customer))
            .returning(CustomerModel::as_returning())
            .get_result(self.conn())?;

        Ok(inserted.into())
    }

    fn find_technician(&mut self, id: Uuid) -> AppResult<Option<Technician>> {
        let technician: Option<TechnicianModel> = technicians::table
            .find(id)
            .select(TechnicianModel::as_select())
            .first(self.conn())
            .optional()?;

        Ok(technician.map(Technician::from))
    }

    fn insert_technician(&mut self, technician: &Technician) -> AppResult<Technician> {
        let inserted: TechnicianModel = diesel::insert_into(technicians::table)
            .values(TechnicianModel::from(technician))
            .returning(TechnicianModel::as_returning())
            .get_result(self.conn())?;

        Ok(inserted.into())
    }

    fn list_technicians(
        &mut self,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Technician>, u64)> {
        let rows: Vec<TechnicianModel> = technicians::table
            .select(TechnicianModel::as_select())
            .order((technicians::name.asc(), technicians::id.asc()))
            .offset(params.offset())
            .limit(params.limit())
            .load(self.conn())?;
        let total: i64 = technicians::table.count().get_result(self.conn())?;

        Ok((rows.into_iter().map(Technician::from).collect(), total as u64))
    }
}
