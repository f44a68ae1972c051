//! Test support for the workspace: in-memory implementations of the
//! persistence ports and helpers to assemble a router around them.
//!
//! The in-memory repos honor the persistence and query contracts the MySQL
//! adapters implement (server-assigned monotonic ids, store-side timestamps,
//! newest-first ordering with an id tiebreaker), so the contract tests
//! exercise real semantics without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use domains::{
    Feedback, FeedbackRepo, Listing, NewFeedback, NewRegistration, Page, RegistrationRepo,
    Result, SubmissionMeta, UserRegistration,
};
use report_adapters::XlsxReportRenderer;
use secrecy::SecretString;
use services::{AdminService, IntakeService};

pub const TEST_ADMIN_KEY: &str = "test-admin-key";

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn page_of<T: Clone>(rows: &[T], page: Page) -> Listing<T> {
    let start = page.offset() as usize;
    let items = rows
        .iter()
        .rev()
        .skip(start)
        .take(page.per_page as usize)
        .cloned()
        .collect();
    Listing {
        items,
        total: rows.len() as u64,
    }
}

#[derive(Default)]
pub struct InMemoryRegistrations {
    rows: Mutex<Vec<UserRegistration>>,
}

#[async_trait]
impl RegistrationRepo for InMemoryRegistrations {
    async fn insert(
        &self,
        record: NewRegistration,
        meta: SubmissionMeta,
    ) -> Result<UserRegistration> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        let stored = UserRegistration {
            id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            gender: record.gender,
            profession: record.profession,
            user_type: record.user_type,
            submitted_at: base_time() + Duration::seconds(id),
            ip_address: meta.ip_address,
            user_agent: meta.user_agent,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, page: Page) -> Result<Listing<UserRegistration>> {
        Ok(page_of(&self.rows.lock().unwrap(), page))
    }

    async fn list_all(&self) -> Result<Vec<UserRegistration>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().rev().cloned().collect())
    }
}

#[derive(Default)]
pub struct InMemoryFeedback {
    rows: Mutex<Vec<Feedback>>,
}

#[async_trait]
impl FeedbackRepo for InMemoryFeedback {
    async fn insert(&self, record: NewFeedback, meta: SubmissionMeta) -> Result<Feedback> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        let stored = Feedback {
            id,
            visual_design: record.visual_design,
            ease_of_navigation: record.ease_of_navigation,
            mobile_responsiveness: record.mobile_responsiveness,
            overall_satisfaction: record.overall_satisfaction,
            ease_of_tasks: record.ease_of_tasks,
            quality_of_services: record.quality_of_services,
            visual_design_issue: record.visual_design_issue,
            ease_of_navigation_issue: record.ease_of_navigation_issue,
            mobile_responsiveness_issue: record.mobile_responsiveness_issue,
            overall_satisfaction_issue: record.overall_satisfaction_issue,
            ease_of_tasks_issue: record.ease_of_tasks_issue,
            quality_of_services_issue: record.quality_of_services_issue,
            like_most: record.like_most,
            improvements: record.improvements,
            features: record.features,
            legal_challenges: record.legal_challenges,
            additional_comments: record.additional_comments,
            contact_willing: record.contact_willing,
            contact_email: record.contact_email,
            submitted_at: base_time() + Duration::seconds(id),
            ip_address: meta.ip_address,
            user_agent: meta.user_agent,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, page: Page) -> Result<Listing<Feedback>> {
        Ok(page_of(&self.rows.lock().unwrap(), page))
    }

    async fn list_all(&self) -> Result<Vec<Feedback>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().rev().cloned().collect())
    }
}

/// Services wired to fresh in-memory stores.
pub fn in_memory_services() -> (Arc<IntakeService>, Arc<AdminService>) {
    let registrations = Arc::new(InMemoryRegistrations::default());
    let feedback = Arc::new(InMemoryFeedback::default());
    let intake = Arc::new(IntakeService::new(registrations.clone(), feedback.clone()));
    let admin = Arc::new(AdminService::new(
        registrations,
        feedback,
        Arc::new(XlsxReportRenderer),
    ));
    (intake, admin)
}

/// A full router over in-memory storage, admin-keyed with [`TEST_ADMIN_KEY`].
pub fn test_router() -> axum::Router {
    let (intake, admin) = in_memory_services();
    test_router_with(intake, admin)
}

pub fn test_router_with(intake: Arc<IntakeService>, admin: Arc<AdminService>) -> axum::Router {
    let state = api_adapters::AppState {
        intake,
        admin,
        admin_api_key: Arc::new(SecretString::from(TEST_ADMIN_KEY.to_string())),
    };
    api_adapters::router(state, &[])
}
