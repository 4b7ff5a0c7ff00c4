pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::Payment;
pub use repository::PaymentRepository;
pub use value_objects::{PaymentMethod, PaymentMethodDb};
