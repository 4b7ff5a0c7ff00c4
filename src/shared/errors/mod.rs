pub mod app_error;
pub mod constraints;

pub use app_error::{AppError, AppResult, ErrorKind};
