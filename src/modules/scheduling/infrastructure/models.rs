use crate::modules::scheduling::domain::Appointment;
use crate::schema::appointments;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AppointmentModel {
    pub id: Uuid,
    pub job_id: Uuid,
    pub technician_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<AppointmentModel> for Appointment {
    fn from(model: AppointmentModel) -> Self {
        Appointment {
            id: model.id,
            job_id: model.job_id,
            technician_id: model.technician_id,
            start_time: model.start_time,
            end_time: model.end_time,
            created_at: model.created_at,
        }
    }
}

impl From<&Appointment> for AppointmentModel {
    fn from(appointment: &Appointment) -> Self {
        AppointmentModel {
            id: appointment.id,
            job_id: appointment.job_id,
            technician_id: appointment.technician_id,
            start_time: appointment.start_time,
            end_time: appointment.end_time,
            created_at: appointment.created_at,
        }
    }
}
