//! # services
//!
//! Orchestration between the validation contract and the persistence ports.
//! No I/O happens here beyond what the injected ports perform.

mod admin;
mod intake;

pub use admin::AdminService;
pub use intake::IntakeService;
