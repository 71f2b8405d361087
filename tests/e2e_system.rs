// tests/e2e_system.rs
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt as _;

mod support;

#[tokio::test]
async fn health_reports_media_provider() {
    let app = support::make_test_router(Arc::new(support::InMemoryDocumentStore::new()));

    let resp = support::get(app, "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::body_json(resp).await;
    assert_eq!(body, json!({ "status": "ok", "media_provider": "local" }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::make_test_router(Arc::new(support::InMemoryDocumentStore::new()));

    let resp = support::get(app, "/openapi.json").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::body_json(resp).await;
    assert!(body["paths"].get("/api/columns/{id}").is_some());
    assert!(body["paths"].get("/sitemap.xml").is_some());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = support::make_test_router(Arc::new(support::InMemoryDocumentStore::new()));
    let resp = support::get(app, "/api/nope").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn public_reads_are_limited_per_forwarded_client() {
    let state = support::build_test_state(Arc::new(support::InMemoryDocumentStore::new()));
    let app = editorial_core::presentation::http::routes::build_router(state);

    let mut statuses = Vec::new();
    for _ in 0..60 {
        let req = Request::builder()
            .uri("/robots.txt")
            .header("x-forwarded-for", "203.0.113.7")
            .body(Body::empty())
            .unwrap();
        statuses.push(app.clone().oneshot(req).await.unwrap().status());
    }

    assert_eq!(statuses[0], StatusCode::OK);
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));

    // health is outside the limited routes
    let resp = support::get(app, "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
}
