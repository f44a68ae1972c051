//! Error-to-HTTP mapping.
//!
//! Validation failures are itemized per field; everything backend-side
//! collapses to an opaque 500 so driver detail never reaches a client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domains::{FieldViolation, IntakeError};
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<FieldViolation>),
    BadRequest(String),
    Unauthorized,
    NotFound,
    Internal,
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::Validation(violations) => Self::Validation(violations),
            IntakeError::Persistence(_) | IntakeError::Report(_) => Self::Internal,
        }
    }
}

/// Wire shape for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: Option<Vec<FieldViolation>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(details) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "validation failed".into(),
                    details: Some(details),
                },
            ),
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    details: None,
                },
            ),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    error: "Unauthorized".into(),
                    details: None,
                },
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Endpoint not found".into(),
                    details: None,
                },
            ),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Internal server error".into(),
                    details: None,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
