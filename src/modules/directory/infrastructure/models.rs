use crate::modules::directory::domain::{Customer, Technician};
use crate::schema::{customers, technicians};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = technicians)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TechnicianModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<CustomerModel> for Customer {
    fn from(model: CustomerModel) -> Self {
        Customer {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            created_at: model.created_at,
        }
    }
}

impl From<&Customer> for CustomerModel {
    fn from(customer: &Customer) -> Self {
        CustomerModel {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
            created_at: customer.created_at,
        }
    }
}

impl From<TechnicianModel> for Technician {
    fn from(model: TechnicianModel) -> Self {
        Technician {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at,
        }
    }
}

impl From<&Technician> for TechnicianModel {
    fn from(technician: &Technician) -> Self {
        TechnicianModel {
            id: technician.id,
            name: technician.name.clone(),
            email: technician.email.clone(),
            phone: technician.phone.clone(),
            created_at: technician.created_at,
        }
    }
}
