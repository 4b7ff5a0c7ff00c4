pub mod scheduler;

pub use scheduler::AppointmentScheduler;
