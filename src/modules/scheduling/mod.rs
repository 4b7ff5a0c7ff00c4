pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::AppointmentScheduler;
pub use domain::{Appointment, AppointmentRepository, AppointmentRequest};
