//! Public submission flow: validate, then persist.

use std::sync::Arc;

use domains::{
    Feedback, FeedbackDraft, FeedbackRepo, IntakeError, RegistrationDraft, RegistrationRepo,
    Result, SubmissionMeta, UserRegistration,
};

/// Accepts raw drafts from the boundary layer. A draft only reaches a repo
/// after the whole validation contract has passed, so a rejected submission
/// can never leave a partial row behind.
pub struct IntakeService {
    registrations: Arc<dyn RegistrationRepo>,
    feedback: Arc<dyn FeedbackRepo>,
}

impl IntakeService {
    pub fn new(registrations: Arc<dyn RegistrationRepo>, feedback: Arc<dyn FeedbackRepo>) -> Self {
        Self {
            registrations,
            feedback,
        }
    }

    pub async fn submit_registration(
        &self,
        draft: RegistrationDraft,
        meta: SubmissionMeta,
    ) -> Result<UserRegistration> {
        let record = draft.validate().map_err(IntakeError::Validation)?;
        let stored = self.registrations.insert(record, meta).await?;
        tracing::info!(id = stored.id, "registration submitted");
        Ok(stored)
    }

    pub async fn submit_feedback(
        &self,
        draft: FeedbackDraft,
        meta: SubmissionMeta,
    ) -> Result<Feedback> {
        let record = draft.validate().map_err(IntakeError::Validation)?;
        let stored = self.feedback.insert(record, meta).await?;
        tracing::info!(id = stored.id, "feedback submitted");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domains::{MockFeedbackRepo, MockRegistrationRepo, NewRegistration, UserType};

    fn stored_registration(record: &NewRegistration) -> UserRegistration {
        UserRegistration {
            id: 7,
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            gender: record.gender.clone(),
            profession: record.profession.clone(),
            user_type: record.user_type,
            submitted_at: Utc::now(),
            ip_address: None,
            user_agent: None,
        }
    }

    #[tokio::test]
    async fn submit_registration_passes_the_normalized_record_to_the_repo() {
        let mut repo = MockRegistrationRepo::new();
        repo.expect_insert()
            .withf(|record, _meta| record.name == "Jane Doe" && record.user_type == UserType::User)
            .times(1)
            .returning(|record, _| Ok(stored_registration(&record)));

        let service = IntakeService::new(Arc::new(repo), Arc::new(MockFeedbackRepo::new()));
        let draft = RegistrationDraft {
            name: Some("  Jane Doe  ".into()),
            email: Some("jane@example.com".into()),
            phone: Some("5551234".into()),
            user_type: Some("USER".into()),
            ..RegistrationDraft::default()
        };

        let stored = service
            .submit_registration(draft, SubmissionMeta::default())
            .await
            .unwrap();
        assert_eq!(stored.id, 7);
        assert_eq!(stored.name, "Jane Doe");
    }

    #[tokio::test]
    async fn invalid_registration_never_reaches_the_repo() {
        let mut repo = MockRegistrationRepo::new();
        repo.expect_insert().times(0);

        let service = IntakeService::new(Arc::new(repo), Arc::new(MockFeedbackRepo::new()));
        let err = service
            .submit_registration(RegistrationDraft::default(), SubmissionMeta::default())
            .await
            .unwrap_err();

        match err {
            IntakeError::Validation(violations) => assert!(!violations.is_empty()),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn repo_failure_surfaces_as_persistence_error() {
        let mut repo = MockFeedbackRepo::new();
        repo.expect_insert()
            .returning(|_, _| Err(IntakeError::persistence(anyhow::anyhow!("connection reset"))));

        let service = IntakeService::new(Arc::new(MockRegistrationRepo::new()), Arc::new(repo));
        let err = service
            .submit_feedback(FeedbackDraft::default(), SubmissionMeta::default())
            .await
            .unwrap_err();

        assert!(matches!(err, IntakeError::Persistence(_)));
        assert_eq!(err.to_string(), "storage backend failure");
    }
}
