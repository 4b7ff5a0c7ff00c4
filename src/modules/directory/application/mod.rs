pub mod service;

pub use service::DirectoryService;
