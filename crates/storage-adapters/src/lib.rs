//! # storage-adapters
//!
//! sqlx/MySQL implementations of the persistence ports. The data mapping
//! between the relational model and the domain entities lives here; the
//! domain crate never sees a row or a pool.

mod feedback;
mod pool;
mod registrations;

pub use feedback::MySqlFeedbackRepo;
pub use pool::{connect, PoolSettings};
pub use registrations::MySqlRegistrationRepo;

/// Embedded schema migrations, applied by the binary at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

use domains::IntakeError;

/// Logs the full backend failure for operators, then hands the caller the
/// opaque variant. Raw driver text never travels past this point.
pub(crate) fn db_error(op: &'static str, cause: impl Into<anyhow::Error>) -> IntakeError {
    let cause = cause.into();
    tracing::error!(op, error = ?cause, "database operation failed");
    IntakeError::Persistence(cause)
}
