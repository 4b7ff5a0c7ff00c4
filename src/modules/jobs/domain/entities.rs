/// Domain entities for the job lifecycle
///
/// A job is created in `new` and only ever moves forward along the transition
/// table in `value_objects`. Status changes go through [`Job::advance`].
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{JobStatus, TransitionPath};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub title: String,
    pub description: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(customer_id: Uuid, title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            title,
            description,
            status: JobStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move to `target` if the edge exists and is taken through `path`
    pub fn advance(&mut self, target: JobStatus, path: TransitionPath) -> AppResult<()> {
        match self.status.transition_path(target) {
            Some(required) if required == path => {
                self.status = target;
                self.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(AppError::BadRequest(format!(
                "Invalid status transition: {} → {}. Allowed transitions from {}: {}",
                self.status,
                target,
                self.status,
                Self::describe_edges(self.status, path)
            ))),
        }
    }

    fn describe_edges(from: JobStatus, path: TransitionPath) -> String {
        let targets: Vec<String> = from
            .allowed_next()
            .iter()
            .filter(|next| from.transition_path(**next) == Some(path))
            .map(|next| format!("{} → {}", from, next))
            .collect();

        if targets.is_empty() {
            "none".to_string()
        } else {
            targets.join(", ")
        }
    }
}

/// Listing filter for jobs
#[derive(Debug, Clone, Copy, Default)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
}
