use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::entities::Appointment;
use crate::shared::errors::AppResult;

pub trait AppointmentRepository {
    /// Any appointment of `technician_id` with `existing.start < end && existing.end > start`
    fn find_overlapping_appointment(
        &mut self,
        technician_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Option<Appointment>>;

    fn insert_appointment(&mut self, appointment: &Appointment) -> AppResult<Appointment>;

    fn find_appointment_for_job(&mut self, job_id: Uuid) -> AppResult<Option<Appointment>>;
}
