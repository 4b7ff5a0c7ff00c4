/// Record access for jobs inside a transaction context
///
/// Implemented by every store backend; methods take `&mut self` because they
/// run on the connection (or staged tables) owned by the open unit of work.
use crate::modules::jobs::domain::entities::{Job, JobFilter};
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;
use uuid::Uuid;

pub trait JobRepository {
    fn find_job(&mut self, id: Uuid) -> AppResult<Option<Job>>;

    /// Read a job and hold a row lock on it until the transaction ends
    fn lock_job(&mut self, id: Uuid) -> AppResult<Option<Job>>;

    fn find_job_by_title(&mut self, customer_id: Uuid, title: &str) -> AppResult<Option<Job>>;

    fn insert_job(&mut self, job: &Job) -> AppResult<Job>;

    /// Persist `job.status` and `job.updated_at`
    fn update_job_status(&mut self, job: &Job) -> AppResult<Job>;

    /// Newest first; returns the page and the total matching count
    fn list_jobs(
        &mut self,
        filter: &JobFilter,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Job>, u64)>;
}
