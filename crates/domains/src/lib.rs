//! Central domain logic and interface definitions for the intake service.
//!
//! Everything in this crate is I/O-free: entities, the submission validation
//! contract, the error taxonomy, and the port traits the adapter crates
//! implement.

pub mod error;
pub mod models;
pub mod ports;
pub mod submission;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use ports::*;
pub use submission::*;
