pub mod entities;
pub mod repository;

pub use entities::{Appointment, AppointmentRequest};
pub use repository::AppointmentRepository;
