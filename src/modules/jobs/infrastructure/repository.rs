/// Diesel-based implementation of JobRepository
///
/// Saga reads go through `lock_job`, which takes a `FOR UPDATE` row lock so a
/// concurrent saga on the same job waits and then re-reads the new status.
use crate::infrastructure::postgres::PgContext;
use crate::modules::jobs::domain::entities::{Job, JobFilter};
use crate::modules::jobs::domain::repository::JobRepository;
use crate::modules::jobs::domain::value_objects::JobStatusDb;
use crate::modules::jobs::infrastructure::models::JobModel;
use crate::schema::jobs;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;
use diesel::prelude::*;
use uuid::Uuid;

impl JobRepository for PgContext<'_> {
    fn find_job(&mut self, id: Uuid) -> AppResult<Option<Job>> {
        let job: Option<JobModel> = jobs::table
            .find(id)
            .select(JobModel::as_select())
            .first(self.conn())
            .optional()?;

        Ok(job.map(Job::from))
    }

    fn lock_job(&mut self, id: Uuid) -> AppResult<Option<Job>> {
        let job: Option<JobModel> = jobs::table
            .find(id)
            .select(JobModel::as_select())
            .for_update()
            .first(self.conn())
            .optional()?;

        Ok(job.map(Job::from))
    }

    fn find_job_by_title(&mut self, customer_id: Uuid, title: &str) -> AppResult<Option<Job>> {
        let job: Option<JobModel> = jobs::table
            .filter(jobs::customer_id.eq(customer_id))
            .filter(jobs::title.eq(title))
            .select(JobModel::as_select())
            .first(self.conn())
            .optional()?;

        Ok(job.map(Job::from))
    }

    fn insert_job(&mut self, job: &Job) -> AppResult<Job> {
        let inserted: JobModel = diesel::insert_into(jobs::table)
            .values(JobModel::from(job))
            .returning(JobModel::as_returning())
            .get_result(self.conn())?;

        Ok(inserted.into())
    }

    fn update_job_status(&mut self, job: &Job) -> AppResult<Job> {
        let updated: JobModel = diesel::update(jobs::table.find(job.id))
            .set((
                jobs::status.eq(JobStatusDb::from(job.status)),
                jobs::updated_at.eq(job.updated_at),
            ))
            .returning(JobModel::as_returning())
            .get_result(self.conn())?;

        Ok(updated.into())
    }

    fn list_jobs(
        &mut self,
        filter: &JobFilter,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Job>, u64)> {
        let mut query = jobs::table.select(JobModel::as_select()).into_boxed();
        let mut count_query = jobs::table.count().into_boxed();

        if let Some(status) = filter.status {
            let status = JobStatusDb::from(status);
            query = query.filter(jobs::status.eq(status));
            count_query = count_query.filter(jobs::status.eq(status));
        }

        let rows: Vec<JobModel> = query
            .order((jobs::created_at.desc(), jobs::id.desc()))
            .offset(params.offset())
            .limit(params.limit())
            .load(self.conn())?;
        let total: i64 = count_query.get_result(self.conn())?;

        Ok((rows.into_iter().map(Job::from).collect(), total as u64))
    }
}
