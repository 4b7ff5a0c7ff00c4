/// Value objects for the jobs domain: lifecycle status and its transition table
use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;

/// Lifecycle status of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    New,
    Scheduled,
    InProgress,
    Done,
    Invoiced,
    Paid,
}

/// How a status edge may be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPath {
    /// Plain status edit through `update_status`
    Direct,
    /// Side effect of a multi-record saga (scheduling, invoicing, payment)
    Saga,
}

impl JobStatus {
    pub const ALL: [JobStatus; 6] = [
        JobStatus::New,
        JobStatus::Scheduled,
        JobStatus::InProgress,
        JobStatus::Done,
        JobStatus::Invoiced,
        JobStatus::Paid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::New => "new",
            JobStatus::Scheduled => "scheduled",
            JobStatus::InProgress => "in_progress",
            JobStatus::Done => "done",
            JobStatus::Invoiced => "invoiced",
            JobStatus::Paid => "paid",
        }
    }

    /// Every status reachable in one step from `self`
    pub fn allowed_next(&self) -> &'static [JobStatus] {
        match self {
            JobStatus::New => &[JobStatus::Scheduled],
            JobStatus::Scheduled => &[JobStatus::InProgress],
            JobStatus::InProgress => &[JobStatus::Done],
            JobStatus::Done => &[JobStatus::Invoiced],
            JobStatus::Invoiced => &[JobStatus::Paid],
            JobStatus::Paid => &[],
        }
    }

    /// The path an edge must be taken through, or `None` if the edge does not exist
    pub fn transition_path(&self, target: JobStatus) -> Option<TransitionPath> {
        if !self.allowed_next().contains(&target) {
            return None;
        }
        match (self, target) {
            (JobStatus::Scheduled, JobStatus::InProgress)
            | (JobStatus::InProgress, JobStatus::Done) => Some(TransitionPath::Direct),
            _ => Some(TransitionPath::Saga),
        }
    }

    /// Targets reachable from `self` through a direct status edit
    pub fn direct_targets(&self) -> Vec<JobStatus> {
        self.allowed_next()
            .iter()
            .copied()
            .filter(|next| self.transition_path(*next) == Some(TransitionPath::Direct))
            .collect()
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_next().is_empty()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::BadRequest(format!("Invalid job status: {}", s)))
    }
}

/// Job status enum matching database type
#[derive(diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[ExistingTypePath = "crate::schema::sql_types::JobStatus"]
pub enum JobStatusDb {
    New,
    Scheduled,
    InProgress,
    Done,
    Invoiced,
    Paid,
}

impl From<JobStatus> for JobStatusDb {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::New => JobStatusDb::New,
            JobStatus::Scheduled => JobStatusDb::Scheduled,
            JobStatus::InProgress => JobStatusDb::InProgress,
            JobStatus::Done => JobStatusDb::Done,
            JobStatus::Invoiced => JobStatusDb::Invoiced,
            JobStatus::Paid => JobStatusDb::Paid,
        }
    }
}

impl From<JobStatusDb> for JobStatus {
    fn from(status: JobStatusDb) -> Self {
        match status {
            JobStatusDb::New => JobStatus::New,
            JobStatusDb::Scheduled => JobStatus::Scheduled,
            JobStatusDb::InProgress => JobStatus::InProgress,
            JobStatusDb::Done => JobStatus::Done,
            JobStatusDb::Invoiced => JobStatus::Invoiced,
            JobStatusDb::Paid => JobStatus::Paid,
        }
    }
}
