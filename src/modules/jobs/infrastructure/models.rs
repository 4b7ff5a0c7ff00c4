/// Diesel models for the jobs table
use crate::modules::jobs::domain::{entities::Job, value_objects::JobStatusDb};
use crate::schema::jobs;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct JobModel {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub title: String,
    pub description: String,
    pub status: JobStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobModel> for Job {
    fn from(model: JobModel) -> Self {
        Job {
            id: model.id,
            customer_id: model.customer_id,
            title: model.title,
            description: model.description,
            status: model.status.into(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&Job> for JobModel {
    fn from(job: &Job) -> Self {
        JobModel {
            id: job.id,
            customer_id: job.customer_id,
            title: job.title.clone(),
            description: job.description.clone(),
            status: job.status.into(),
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}
