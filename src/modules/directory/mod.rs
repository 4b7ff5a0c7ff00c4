pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::DirectoryService;
pub use domain::{Customer, DirectoryRepository, Technician};
