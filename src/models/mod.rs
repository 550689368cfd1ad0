pub mod application;
pub mod blog;
pub mod employer;
pub mod job;
pub mod payment;
