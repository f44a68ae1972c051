//! Handlers: the thin glue between HTTP and the services.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::auth::RequireAdminKey;
use crate::dto::{
    FeedbackListBody, FeedbackRequest, HealthBody, HomeBody, PageQuery, RegisterRequest,
    RegistrationListBody, SuccessBody,
};
use crate::error::ApiError;
use crate::extract::ClientMeta;
use crate::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub async fn home() -> Json<HomeBody> {
    Json(HomeBody {
        message: "Intake API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: serde_json::json!({
            "health": "/api/health",
            "register": "/api/register",
            "feedback": "/api/feedback",
            "registrations": "/api/registrations",
            "download": "/api/download-excel",
        }),
    })
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

// Browsers poll for this; answering 204 keeps the 404 noise out of the logs.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn register_user(
    State(state): State<AppState>,
    meta: ClientMeta,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SuccessBody>), ApiError> {
    let stored = state
        .intake
        .submit_registration(body.into_draft(), meta.into_submission_meta())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(SuccessBody {
            message: "Registration submitted successfully".into(),
            id: stored.id,
            submitted_at: stored.submitted_at,
        }),
    ))
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    meta: ClientMeta,
    Json(body): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<SuccessBody>), ApiError> {
    let stored = state
        .intake
        .submit_feedback(body.into_draft(), meta.into_submission_meta())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(SuccessBody {
            message: "Feedback submitted successfully".into(),
            id: stored.id,
            submitted_at: stored.submitted_at,
        }),
    ))
}

pub async fn list_registrations(
    _admin: RequireAdminKey,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<RegistrationListBody>, ApiError> {
    let page = query.into_page()?;
    let listing = state.admin.list_registrations(page).await?;
    Ok(Json(RegistrationListBody {
        total: listing.total,
        pages: listing.page_count(page.per_page),
        current_page: page.page,
        per_page: page.per_page,
        registrations: listing.items,
    }))
}

pub async fn list_feedback(
    _admin: RequireAdminKey,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<FeedbackListBody>, ApiError> {
    let page = query.into_page()?;
    let listing = state.admin.list_feedback(page).await?;
    Ok(Json(FeedbackListBody {
        total: listing.total,
        pages: listing.page_count(page.per_page),
        current_page: page.page,
        per_page: page.per_page,
        feedback: listing.items,
    }))
}

pub async fn download_excel(
    _admin: RequireAdminKey,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let bytes = state.admin.export_report().await?;
    let filename = format!("intake_report_{}.xlsx", Utc::now().format("%Y%m%d_%H%M%S"));
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
        .into_response())
}
