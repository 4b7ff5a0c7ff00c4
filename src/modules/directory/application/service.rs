use std::sync::Arc;

use uuid::Uuid;

use crate::modules::directory::domain::{Customer, Technician};
use crate::shared::application::{PaginatedResult, PaginationParams, TransactionManager};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Customer and technician records the lifecycle sagas refer to
pub struct DirectoryService<S: TransactionManager> {
    store: Arc<S>,
}

impl<S: TransactionManager> Clone for DirectoryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

/// The email and phone may be held by two different customers
fn contact_conflict(existing: &[Customer], email: &str, phone: &str) -> Option<AppError> {
    let email_taken = existing.iter().any(|c| c.email == email);
    let phone_taken = existing.iter().any(|c| c.phone == phone);
    let message = match (email_taken, phone_taken) {
        (true, true) => "Customer with this email and phone number already exists.",
        (true, false) => "Customer with this email already exists.",
        (false, true) => "Customer with this phone number already exists.",
        (false, false) => return None,
    };
    Some(AppError::Conflict(message.to_string()))
}

impl<S: TransactionManager> DirectoryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn register_customer(
        &self,
        name: String,
        email: String,
        phone: String,
        address: String,
    ) -> AppResult<Customer> {
        Validator::validate_required("Customer name", &name)?;
        Validator::validate_email(&email)?;
        Validator::validate_required("Phone number", &phone)?;

        let customer = Customer::new(name, email, phone, address);
        let saved = self
            .store
            .transaction(move |tx| {
                // Check if customers already use this email or phone
                let existing = tx.find_customers_by_contact(&customer.email, &customer.phone)?;
                if let Some(err) = contact_conflict(&existing, &customer.email, &customer.phone) {
                    return Err(err);
                }
                tx.insert_customer(&customer)
            })
            .await?;

        log_info!("Registered customer {} ({})", saved.id, saved.email);
        Ok(saved)
    }

    pub async fn find_customer(&self, id: Uuid) -> AppResult<Customer> {
        self.store
            .execute(move |tx| tx.find_customer(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer with ID {} not found", id)))
    }

    pub async fn register_technician(
        &self,
        name: String,
        email: String,
        phone: String,
    ) -> AppResult<Technician> {
        Validator::validate_required("Technician name", &name)?;
        Validator::validate_email(&email)?;

        let technician = Technician::new(name, email, phone);
        let saved = self
            .store
            .execute(move |tx| tx.insert_technician(&technician))
            .await?;

        log_info!("Registered technician {} ({})", saved.id, saved.email);
        Ok(saved)
    }

    pub async fn find_technician(&self, id: Uuid) -> AppResult<Technician> {
        self.store
            .execute(move |tx| tx.find_technician(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Technician with ID {} not found", id)))
    }

    /// Sorted by name
    pub async fn list_technicians(
        &self,
        page: u32,
        limit: u32,
    ) -> AppResult<PaginatedResult<Technician>> {
        let params = PaginationParams::new(page, limit);
        let (items, total) = self
            .store
            .execute(move |tx| tx.list_technicians(&params))
            .await?;
        Ok(PaginatedResult::new(items, total, &params))
    }

    /// Insert the default roster when no technician exists yet.
    ///
    /// Returns how many technicians were inserted (zero when the table
    /// already had rows).
    pub async fn seed_technicians(&self) -> AppResult<usize> {
        self.store
            .transaction(|tx| {
                let (_, existing) = tx.list_technicians(&PaginationParams::new(1, 1))?;
                if existing > 0 {
                    log_debug!("Technician table has {} rows, skipping seed", existing);
                    return Ok(0);
                }

                let roster = Technician::default_roster();
                for technician in &roster {
                    tx.insert_technician(technician)?;
                }
                log_info!("Seeded {} default technicians", roster.len());
                Ok(roster.len())
            })
            .await
    }
}
