//! Round-trip and pagination behavior across the service layer, backed by
//! the in-memory contract implementations.

use domains::{FeedbackDraft, Page, RegistrationDraft, SubmissionMeta};
use integration_tests::in_memory_services;

fn registration(name: &str) -> RegistrationDraft {
    RegistrationDraft {
        name: Some(name.to_string()),
        email: Some(format!(
            "{}@example.com",
            name.to_lowercase().replace(' ', ".")
        )),
        phone: Some("5551234".into()),
        user_type: Some("USER".into()),
        ..RegistrationDraft::default()
    }
}

#[tokio::test]
async fn create_then_list_returns_the_record_first() {
    let (intake, admin) = in_memory_services();

    intake
        .submit_registration(registration("First User"), SubmissionMeta::default())
        .await
        .unwrap();
    let stored = intake
        .submit_registration(registration("Second User"), SubmissionMeta::default())
        .await
        .unwrap();
    assert!(stored.id > 0);

    let listing = admin
        .list_registrations(Page { page: 1, per_page: 1 })
        .await
        .unwrap();
    assert_eq!(listing.total, 2);
    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.items[0], stored, "most recent record comes first");
}

#[tokio::test]
async fn reads_are_idempotent_without_intervening_writes() {
    let (intake, admin) = in_memory_services();
    for i in 0..5 {
        intake
            .submit_registration(registration(&format!("User {i}")), SubmissionMeta::default())
            .await
            .unwrap();
    }

    let page = Page { page: 1, per_page: 3 };
    let first = admin.list_registrations(page).await.unwrap();
    let second = admin.list_registrations(page).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn page_past_the_end_is_empty_but_keeps_the_total() {
    let (intake, admin) = in_memory_services();
    for i in 0..10 {
        intake
            .submit_registration(registration(&format!("User {i}")), SubmissionMeta::default())
            .await
            .unwrap();
    }

    let listing = admin
        .list_registrations(Page { page: 2, per_page: 10 })
        .await
        .unwrap();
    assert!(listing.items.is_empty());
    assert_eq!(listing.total, 10);
}

#[tokio::test]
async fn ids_are_assigned_monotonically() {
    let (intake, _) = in_memory_services();
    let mut last = 0;
    for i in 0..4 {
        let stored = intake
            .submit_registration(registration(&format!("User {i}")), SubmissionMeta::default())
            .await
            .unwrap();
        assert!(stored.id > last);
        last = stored.id;
    }
}

#[tokio::test]
async fn feedback_round_trip_preserves_field_values() {
    let (intake, admin) = in_memory_services();

    let draft = FeedbackDraft {
        visual_design: Some(1),
        visual_design_issue: Some("too cluttered".into()),
        ..FeedbackDraft::default()
    };
    let stored = intake
        .submit_feedback(draft, SubmissionMeta::default())
        .await
        .unwrap();

    let listing = admin
        .list_feedback(Page { page: 1, per_page: 1 })
        .await
        .unwrap();
    assert_eq!(listing.items[0].visual_design, Some(1));
    assert_eq!(
        listing.items[0].visual_design_issue.as_deref(),
        Some("too cluttered")
    );
    assert_eq!(listing.items[0].id, stored.id);
    assert_eq!(listing.items[0].submitted_at, stored.submitted_at);
}

#[tokio::test]
async fn provenance_is_stored_verbatim() {
    let (intake, admin) = in_memory_services();
    let meta = SubmissionMeta {
        ip_address: Some("203.0.113.9".into()),
        user_agent: Some("integration-test/1.0".into()),
    };
    intake
        .submit_registration(registration("Jane Doe"), meta.clone())
        .await
        .unwrap();

    let listing = admin
        .list_registrations(Page::default())
        .await
        .unwrap();
    assert_eq!(listing.items[0].ip_address, meta.ip_address);
    assert_eq!(listing.items[0].user_agent, meta.user_agent);
}

#[tokio::test]
async fn export_report_renders_the_full_store() {
    let (intake, admin) = in_memory_services();
    for i in 0..3 {
        intake
            .submit_registration(registration(&format!("User {i}")), SubmissionMeta::default())
            .await
            .unwrap();
    }
    intake
        .submit_feedback(
            FeedbackDraft {
                overall_satisfaction: Some(5),
                ..FeedbackDraft::default()
            },
            SubmissionMeta::default(),
        )
        .await
        .unwrap();

    let bytes = admin.export_report().await.unwrap();
    assert!(bytes.starts_with(b"PK"));
}
