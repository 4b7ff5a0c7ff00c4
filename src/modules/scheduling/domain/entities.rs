use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

/// A technician visit booked for a job over the half-open window `[start, end)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub job_id: Uuid,
    pub technician_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn new(request: &AppointmentRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id: request.job_id,
            technician_id: request.technician_id,
            start_time: request.start_time,
            end_time: request.end_time,
            created_at: Utc::now(),
        }
    }

    /// Half-open interval intersection: touching windows do not overlap
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time > start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub job_id: Uuid,
    pub technician_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl AppointmentRequest {
    pub fn new(
        job_id: Uuid,
        technician_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            job_id,
            technician_id,
            start_time,
            end_time,
        }
    }

    pub fn validate_window(&self) -> AppResult<()> {
        if self.end_time <= self.start_time {
            return Err(AppError::BadRequest(format!(
                "End date must come after start date (start {}, end {})",
                self.start_time.to_rfc3339(),
                self.end_time.to_rfc3339()
            )));
        }
        Ok(())
    }
}
