//! # Core Traits (Ports)
//!
//! Adapter crates implement these to plug storage and report rendering into
//! the services. Inserts take an already-validated record; the store assigns
//! both the id and the submission timestamp.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Feedback, Listing, Page, SubmissionMeta, UserRegistration};
use crate::submission::{NewFeedback, NewRegistration};

/// Persistence and retrieval contract for user registrations.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RegistrationRepo: Send + Sync {
    /// Inserts one record in a single transaction and returns the stored
    /// entity with its server-assigned id and timestamp.
    async fn insert(&self, record: NewRegistration, meta: SubmissionMeta)
        -> Result<UserRegistration>;

    /// One page, newest first, plus the total count across all pages.
    async fn list(&self, page: Page) -> Result<Listing<UserRegistration>>;

    /// The complete enumeration, newest first, for the export renderer.
    async fn list_all(&self) -> Result<Vec<UserRegistration>>;
}

/// Persistence and retrieval contract for feedback submissions.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait FeedbackRepo: Send + Sync {
    async fn insert(&self, record: NewFeedback, meta: SubmissionMeta) -> Result<Feedback>;

    async fn list(&self, page: Page) -> Result<Listing<Feedback>>;

    async fn list_all(&self) -> Result<Vec<Feedback>>;
}

/// Renders the full data set into a downloadable workbook.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ReportRenderer: Send + Sync {
    fn render(&self, registrations: &[UserRegistration], feedback: &[Feedback])
        -> Result<Vec<u8>>;
}
