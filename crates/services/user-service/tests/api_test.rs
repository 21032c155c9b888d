//! Integration tests for the HTTP routes.
//!
//! The app is built with its session provider overridden, so no database
//! is required.

mod fixtures;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::fixtures::{
    client, client_with, fixed_user, FixedSessionProvider, SharedSessionProvider,
    UnreachableSessionProvider, EMAIL, FIRST_NAME, LICENSE_PLATE,
};

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// User Lookup
// =============================================================================

#[tokio::test]
async fn test_get_user_by_name_returns_email() {
    let (status, body) = get(client(), &format!("/users/{}", FIRST_NAME)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], EMAIL);
    assert_eq!(body["first_name"], FIRST_NAME);
}

#[tokio::test]
async fn test_get_user_by_license_plate() {
    let (status, body) = get(client(), "/users/license-plate/abc-1d23").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], EMAIL);
    assert_eq!(body["license_plate"], LICENSE_PLATE);
}

#[tokio::test]
async fn test_each_request_gets_a_fresh_session() {
    let app = client();

    for _ in 0..3 {
        let (status, body) = get(app.clone(), &format!("/users/{}", FIRST_NAME)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], EMAIL);
    }
}

#[tokio::test]
async fn test_requests_share_one_pooled_session() {
    let app = client_with(SharedSessionProvider::returning(fixed_user(), 2));

    let (status, body) = get(app.clone(), &format!("/users/{}", FIRST_NAME)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], EMAIL);

    let (status, body) = get(app, &format!("/users/license-plate/{}", LICENSE_PLATE)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["license_plate"], LICENSE_PLATE);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let (status, body) = get(client_with(FixedSessionProvider::empty()), "/users/Nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_user_invalid_plate() {
    let (status, body) = get(client(), "/users/license-plate/not_a_plate!").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_user_session_unavailable() {
    let (status, body) = get(
        client_with(UnreachableSessionProvider),
        &format!("/users/{}", FIRST_NAME),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
}

// =============================================================================
// Health and Docs
// =============================================================================

#[tokio::test]
async fn test_health_healthy() {
    let (status, body) = get(client(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_degraded() {
    let (status, body) = get(client_with(UnreachableSessionProvider), "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_openapi_document_lists_user_routes() {
    let (status, body) = get(client(), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/users/{name}").is_some());
    assert!(body["paths"].get("/users/license-plate/{plate}").is_some());
}

#[tokio::test]
async fn test_openapi_document_carries_user_schema_examples() {
    let (_, body) = get(client(), "/api-docs/openapi.json").await;

    let properties = &body["components"]["schemas"]["User"]["properties"];
    assert_eq!(properties["first_name"]["example"], FIRST_NAME);
    assert_eq!(properties["email"]["example"], EMAIL);
    assert_eq!(properties["license_plate"]["example"], LICENSE_PLATE);
}
