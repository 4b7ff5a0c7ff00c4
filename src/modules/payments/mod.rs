pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::PaymentProcessor;
pub use domain::{Payment, PaymentMethod, PaymentRepository};
