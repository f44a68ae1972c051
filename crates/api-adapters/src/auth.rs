//! Admin API-key check.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use secrecy::ExposeSecret;

use crate::error::ApiError;
use crate::AppState;

/// Extractor that gates a handler behind the `x-api-key` header. Rejection
/// happens before any state or storage is touched by the handler body.
pub struct RequireAdminKey;

impl FromRequestParts<AppState> for RequireAdminKey {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let provided = parts
            .headers
            .get("x-api-key")
            .and_then(|value| value.to_str().ok());

        if provided == Some(state.admin_api_key.expose_secret()) {
            Ok(Self)
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}
