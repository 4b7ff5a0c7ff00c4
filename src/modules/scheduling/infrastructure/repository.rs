use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::models::AppointmentModel;
use crate::infrastructure::postgres::PgContext;
use crate::modules::scheduling::domain::{Appointment, AppointmentRepository};
use crate::schema::appointments;
use crate::shared::errors::AppResult;

impl AppointmentRepository for PgContext<'_> {
    fn find_overlapping_appointment(
        &mut self,
        technician_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Option<Appointment>> {
        let existing: Option<AppointmentModel> = appointments::table
            .filter(appointments::technician_id.eq(technician_id))
            .filter(appointments::start_time.lt(end))
            .filter(appointments::end_time.gt(start))
            .order(appointments::start_time.asc())
            .select(AppointmentModel::as_select())
            .first(self.conn())
            .optional()?;

        Ok(existing.map(Appointment::from))
    }

    fn insert_appointment(&mut self, appointment: &Appointment) -> AppResult<Appointment> {
        let inserted: AppointmentModel = diesel::insert_into(appointments::table)
            .values(AppointmentModel::from(appointment))
            .returning(AppointmentModel::as_returning())
            .get_result(self.conn())?;

        Ok(inserted.into())
    }

    fn find_appointment_for_job(&mut self, job_id: Uuid) -> AppResult<Option<Appointment>> {
        let appointment: Option<AppointmentModel> = appointments::table
            .filter(appointments::job_id.eq(job_id))
            .order(appointments::created_at.desc())
            .select(AppointmentModel::as_select())
            .first(self.conn())
            .optional()?;

        Ok(appointment.map(Appointment::from))
    }
}
