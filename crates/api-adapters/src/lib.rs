//! # api-adapters
//!
//! The web routing and orchestration layer: axum handlers over the intake
//! and admin services, plus the boundary translation (external field names,
//! pagination bounds, client metadata, admin key check, error mapping).

pub mod auth;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use secrecy::SecretString;
use services::{AdminService, IntakeService};
use tower_http::trace::TraceLayer;

/// State shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub intake: Arc<IntakeService>,
    pub admin: Arc<AdminService>,
    pub admin_api_key: Arc<SecretString>,
}

/// Builds the full route table.
///
/// `GET /api/feedback` (admin listing) and `POST /api/feedback` (public
/// submission) intentionally share a path; the admin side is guarded by the
/// [`auth::RequireAdminKey`] extractor rather than a route layer.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/health", get(handlers::health))
        .route("/favicon.ico", get(handlers::favicon))
        .route("/api/register", post(handlers::register_user))
        .route(
            "/api/feedback",
            post(handlers::submit_feedback).get(handlers::list_feedback),
        )
        .route("/api/registrations", get(handlers::list_registrations))
        .route("/api/download-excel", get(handlers::download_excel))
        .fallback(handlers::not_found)
        .layer(middleware::cors_policy(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
