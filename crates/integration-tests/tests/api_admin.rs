//! HTTP surface tests for the admin endpoints: key check, pagination,
//! workbook download.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use integration_tests::{test_router, TEST_ADMIN_KEY};
use serde_json::json;
use tower::ServiceExt;

async fn get(
    router: axum::Router,
    uri: &str,
    api_key: Option<&str>,
) -> (StatusCode, axum::http::HeaderMap, axum::body::Bytes) {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    let response = router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), 8 * 1024 * 1024).await.unwrap();
    (status, headers, bytes)
}

async fn submit_registrations(router: &axum::Router, count: usize) {
    for i in 0..count {
        let body = json!({
            "name": format!("User {i}"),
            "email": format!("user{i}@example.com"),
            "phone": "5551234",
            "userType": if i % 2 == 0 { "USER" } else { "Creator" }
        });
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

#[tokio::test]
async fn admin_endpoints_require_the_api_key() {
    let router = test_router();
    for uri in ["/api/registrations", "/api/feedback", "/api/download-excel"] {
        let (status, _, bytes) = get(router.clone(), uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Unauthorized");

        let (status, _, _) = get(router.clone(), uri, Some("wrong-key")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn listing_paginates_and_reports_totals() {
    let router = test_router();
    submit_registrations(&router, 12).await;

    let (status, _, bytes) = get(
        router.clone(),
        "/api/registrations?page=1&per_page=10",
        Some(TEST_ADMIN_KEY),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["total"], 12);
    assert_eq!(body["pages"], 2);
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["per_page"], 10);
    assert_eq!(body["registrations"].as_array().unwrap().len(), 10);
    assert_eq!(body["registrations"][0]["name"], "User 11");

    let (_, _, bytes) = get(
        router,
        "/api/registrations?page=2&per_page=10",
        Some(TEST_ADMIN_KEY),
    )
    .await;
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["registrations"].as_array().unwrap().len(), 2);
    assert_eq!(body["registrations"][1]["name"], "User 0");
}

#[tokio::test]
async fn out_of_bounds_pagination_params_are_rejected() {
    let router = test_router();
    for uri in [
        "/api/registrations?page=0",
        "/api/registrations?per_page=0",
        "/api/registrations?per_page=101",
        "/api/feedback?page=0",
    ] {
        let (status, _, _) = get(router.clone(), uri, Some(TEST_ADMIN_KEY)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn listing_defaults_match_the_original_api() {
    let router = test_router();
    submit_registrations(&router, 3).await;

    let (status, _, bytes) = get(router, "/api/registrations", Some(TEST_ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["per_page"], 50);
    assert_eq!(body["pages"], 1);
}

#[tokio::test]
async fn download_excel_returns_a_workbook_attachment() {
    let router = test_router();
    submit_registrations(&router, 2).await;

    let (status, headers, bytes) = get(router, "/api/download-excel", Some(TEST_ADMIN_KEY)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=intake_report_"));
    assert!(disposition.ends_with(".xlsx"));
    assert!(bytes.starts_with(b"PK"));
}
