pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{Job, JobFilter};
pub use repository::JobRepository;
pub use value_objects::{JobStatus, JobStatusDb, TransitionPath};
