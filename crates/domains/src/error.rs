//! # IntakeError
//!
//! Centralized error handling for the intake service.
//! Validation failures carry a per-field breakdown; backend failures stay
//! opaque to callers and are logged in full by the adapter that hit them.

use serde::Serialize;
use thiserror::Error;

/// What a single field did wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    RequiredFieldMissing,
    LengthExceeded,
    InvalidFormat,
    InvalidEnumValue,
    OutOfRange,
    MissingJustification,
}

/// One rejected field: canonical name, failure kind, human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

/// The primary error type for all intake operations.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// One or more submitted fields were rejected. Nothing was written.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// The storage backend failed. The display text carries no backend
    /// detail; the source is for operator logs only.
    #[error("storage backend failure")]
    Persistence(#[source] anyhow::Error),

    /// Rendering the export workbook failed.
    #[error("report rendering failure")]
    Report(#[source] anyhow::Error),
}

impl IntakeError {
    pub fn persistence(cause: impl Into<anyhow::Error>) -> Self {
        Self::Persistence(cause.into())
    }

    pub fn report(cause: impl Into<anyhow::Error>) -> Self {
        Self::Report(cause.into())
    }
}

/// A specialized Result type for intake logic.
pub type Result<T> = std::result::Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_display_leaks_no_backend_detail() {
        let err = IntakeError::persistence(anyhow::anyhow!(
            "Access denied for user 'root'@'10.0.0.3' (using password: YES)"
        ));
        assert_eq!(err.to_string(), "storage backend failure");
    }

    #[test]
    fn violation_kind_serializes_snake_case() {
        let v = FieldViolation::new(
            "name",
            ViolationKind::RequiredFieldMissing,
            "this field is required",
        );
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["kind"], "required_field_missing");
        assert_eq!(json["field"], "name");
    }
}
