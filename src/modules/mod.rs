pub mod directory;
pub mod invoicing;
pub mod jobs;
pub mod payments;
pub mod scheduling;
