pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::JobLifecycleManager;
pub use domain::{Job, JobFilter, JobRepository, JobStatus, TransitionPath};
