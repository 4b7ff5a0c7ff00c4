pub mod entities;
pub mod repository;

pub use entities::{Customer, Technician};
pub use repository::DirectoryRepository;
