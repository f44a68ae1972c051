//! Administrator views: paginated listings and the workbook export.

use std::sync::Arc;

use domains::{
    Feedback, FeedbackRepo, Listing, Page, RegistrationRepo, ReportRenderer, Result,
    UserRegistration,
};

pub struct AdminService {
    registrations: Arc<dyn RegistrationRepo>,
    feedback: Arc<dyn FeedbackRepo>,
    renderer: Arc<dyn ReportRenderer>,
}

impl AdminService {
    pub fn new(
        registrations: Arc<dyn RegistrationRepo>,
        feedback: Arc<dyn FeedbackRepo>,
        renderer: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            registrations,
            feedback,
            renderer,
        }
    }

    pub async fn list_registrations(&self, page: Page) -> Result<Listing<UserRegistration>> {
        self.registrations.list(page).await
    }

    pub async fn list_feedback(&self, page: Page) -> Result<Listing<Feedback>> {
        self.feedback.list(page).await
    }

    /// Renders the complete data set, both kinds, into one workbook.
    pub async fn export_report(&self) -> Result<Vec<u8>> {
        let registrations = self.registrations.list_all().await?;
        let feedback = self.feedback.list_all().await?;
        let bytes = self.renderer.render(&registrations, &feedback)?;
        tracing::info!(
            registrations = registrations.len(),
            feedback = feedback.len(),
            bytes = bytes.len(),
            "export report rendered"
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{MockFeedbackRepo, MockRegistrationRepo, MockReportRenderer};

    #[tokio::test]
    async fn export_feeds_both_enumerations_to_the_renderer() {
        let mut registrations = MockRegistrationRepo::new();
        registrations.expect_list_all().times(1).returning(|| Ok(vec![]));

        let mut feedback = MockFeedbackRepo::new();
        feedback.expect_list_all().times(1).returning(|| Ok(vec![]));

        let mut renderer = MockReportRenderer::new();
        renderer
            .expect_render()
            .withf(|regs, fb| regs.is_empty() && fb.is_empty())
            .times(1)
            .returning(|_, _| Ok(b"PK\x03\x04".to_vec()));

        let service = AdminService::new(
            Arc::new(registrations),
            Arc::new(feedback),
            Arc::new(renderer),
        );
        let bytes = service.export_report().await.unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn listing_is_delegated_with_the_requested_page() {
        let mut registrations = MockRegistrationRepo::new();
        registrations
            .expect_list()
            .withf(|page| page.page == 2 && page.per_page == 10)
            .returning(|_| Ok(Listing { items: vec![], total: 10 }));

        let service = AdminService::new(
            Arc::new(registrations),
            Arc::new(MockFeedbackRepo::new()),
            Arc::new(MockReportRenderer::new()),
        );
        let listing = service
            .list_registrations(Page { page: 2, per_page: 10 })
            .await
            .unwrap();
        assert!(listing.items.is_empty());
        assert_eq!(listing.total, 10);
    }
}
