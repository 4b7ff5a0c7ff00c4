use crate::modules::jobs::{Job, JobStatus, TransitionPath};
use crate::modules::scheduling::domain::{Appointment, AppointmentRequest};
use crate::shared::application::TransactionContext;
use crate::shared::errors::{AppError, AppResult};
use crate::log_debug;

/// Books technicians onto NEW jobs.
///
/// Always a participant in a caller-owned transaction: it reads and writes
/// through the context it is given and never commits on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppointmentScheduler;

impl AppointmentScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Returns the stored appointment and the job as moved to `scheduled`
    pub fn schedule(
        &self,
        tx: &mut dyn TransactionContext,
        request: &AppointmentRequest,
    ) -> AppResult<(Appointment, Job)> {
        request.validate_window()?;

        // Technician must exist
        tx.find_technician(request.technician_id)?.ok_or_else(|| {
            AppError::NotFound(format!(
                "Technician not found: {}",
                request.technician_id
            ))
        })?;

        let mut job = tx
            .lock_job(request.job_id)?
            .ok_or_else(|| AppError::NotFound(format!("Job not found: {}", request.job_id)))?;

        if job.status != JobStatus::New {
            return Err(AppError::BadRequest(format!(
                "Can only schedule appointment for job with status NEW (job {} is {})",
                job.id, job.status
            )));
        }

        if let Some(existing) = tx.find_overlapping_appointment(
            request.technician_id,
            request.start_time,
            request.end_time,
        )? {
            return Err(AppError::Conflict(format!(
                "Technician {} already has an active appointment from {} to {}",
                request.technician_id,
                existing.start_time.to_rfc3339(),
                existing.end_time.to_rfc3339()
            )));
        }

        job.advance(JobStatus::Scheduled, TransitionPath::Saga)?;
        let job = tx.update_job_status(&job)?;

        let appointment = tx.insert_appointment(&Appointment::new(request))?;
        log_debug!(
            "Appointment {} staged for job {} with technician {}",
            appointment.id,
            job.id,
            appointment.technician_id
        );

        Ok((appointment, job))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryTables;
    use crate::modules::directory::{DirectoryRepository, Technician};
    use crate::modules::jobs::JobRepository;
    use crate::modules::scheduling::domain::AppointmentRepository;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, hour, 0, 0).unwrap()
    }

    fn setup() -> (MemoryTables, Technician, Job) {
        let mut tables = MemoryTables::default();
        let technician = Technician::new(
            "Adams Usman".into(),
            "adams@yopmail.com".into(),
            "08011111111".into(),
        );
        tables.insert_technician(&technician).unwrap();
        let job = Job::new(Uuid::new_v4(), "AC repair".into(), "Split unit".into());
        tables.insert_job(&job).unwrap();
        (tables, technician, job)
    }

    #[test]
    fn test_schedule_moves_job_to_scheduled() {
        let (mut tables, technician, job) = setup();
        let request = AppointmentRequest::new(job.id, technician.id, at(9), at(11));

        let (appointment, job) = AppointmentScheduler::new()
            .schedule(&mut tables, &request)
            .unwrap();

        assert_eq!(job.status, JobStatus::Scheduled);
        assert_eq!(appointment.job_id, job.id);
        assert!(tables.find_appointment_for_job(job.id).unwrap().is_some());
    }

    #[test]
    fn test_inverted_window_rejected() {
        let (mut tables, technician, job) = setup();
        let request = AppointmentRequest::new(job.id, technician.id, at(11), at(11));

        let err = AppointmentScheduler::new()
            .schedule(&mut tables, &request)
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.message().starts_with("End date must come after start date"));
    }

    #[test]
    fn test_unknown_technician() {
        let (mut tables, _, job) = setup();
        let request = AppointmentRequest::new(job.id, Uuid::new_v4(), at(9), at(11));

        let err = AppointmentScheduler::new()
            .schedule(&mut tables, &request)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.message().starts_with("Technician not found"));
    }

    #[test]
    fn test_job_must_be_new() {
        let (mut tables, technician, job) = setup();
        let scheduler = AppointmentScheduler::new();
        scheduler
            .schedule(&mut tables, &AppointmentRequest::new(job.id, technician.id, at(9), at(11)))
            .unwrap();

        let err = scheduler
            .schedule(&mut tables, &AppointmentRequest::new(job.id, technician.id, at(13), at(14)))
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.message().contains("status NEW"));
    }

    #[test]
    fn test_overlap_names_conflicting_window() {
        let (mut tables, technician, first) = setup();
        let second = Job::new(first.customer_id, "Boiler service".into(), "Annual".into());
        tables.insert_job(&second).unwrap();
        let scheduler = AppointmentScheduler::new();

        scheduler
            .schedule(&mut tables, &AppointmentRequest::new(first.id, technician.id, at(9), at(11)))
            .unwrap();
        let err = scheduler
            .schedule(&mut tables, &AppointmentRequest::new(second.id, technician.id, at(10), at(12)))
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert!(err.message().contains(&technician.id.to_string()));
        assert!(err.message().contains("2025-01-01T09:00:00+00:00"));
    }

    #[test]
    fn test_back_to_back_windows_do_not_overlap() {
        let (mut tables, technician, first) = setup();
        let second = Job::new(first.customer_id, "Boiler service".into(), "Annual".into());
        tables.insert_job(&second).unwrap();
        let scheduler = AppointmentScheduler::new();

        scheduler
            .schedule(&mut tables, &AppointmentRequest::new(first.id, technician.id, at(9), at(11)))
            .unwrap();
        scheduler
            .schedule(&mut tables, &AppointmentRequest::new(second.id, technician.id, at(11), at(12)))
            .unwrap();
    }
}
