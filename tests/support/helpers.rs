// tests/support/helpers.rs
use super::mocks::FixedClock;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use editorial_core::application::ports::{ClockPort, DocumentStorePort};
use editorial_core::application::queries::sitemap::SitemapSettings;
use editorial_core::application::services::ApplicationServices;
use editorial_core::config::MediaProviderConfig;
use editorial_core::domain::column::ColumnReadRepository;
use editorial_core::domain::sitemap::{ContentRepository, SiteRoot};
use editorial_core::infrastructure::repositories::{
    DocumentColumnReadRepository, DocumentContentRepository,
};
use editorial_core::presentation::http::state::HttpState;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_SITE_URL: &str = "https://rivista.example";

pub fn test_sitemap_settings() -> SitemapSettings {
    SitemapSettings {
        site_root: SiteRoot::new(Some(TEST_SITE_URL)),
        fetch_limit: 1000,
    }
}

pub fn build_test_state(store: Arc<DocumentStorePort>) -> HttpState {
    let column_repo: Arc<dyn ColumnReadRepository> =
        Arc::new(DocumentColumnReadRepository::new(Arc::clone(&store)));
    let content_repo: Arc<dyn ContentRepository> =
        Arc::new(DocumentContentRepository::new(Arc::clone(&store)));
    let clock: Arc<ClockPort> = Arc::new(FixedClock);

    let services = Arc::new(ApplicationServices::new(
        column_repo,
        content_repo,
        clock,
        test_sitemap_settings(),
    ));

    HttpState {
        services,
        allowed_origins: vec!["http://localhost:3000".to_string()].into(),
        media_provider: Arc::new(MediaProviderConfig::Local {
            upload_dir: "public/uploads".into(),
        }),
    }
}

pub fn make_test_router(store: Arc<DocumentStorePort>) -> axum::Router {
    let state = build_test_state(store);
    editorial_core::presentation::http::routes::build_router_with_rate_limiter(state, false)
}

pub async fn get(app: axum::Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(resp: Response) -> Value {
    let ct = content_type(&resp);
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_str(&body_text(resp).await).expect("valid json body")
}

pub fn content_type(resp: &Response) -> String {
    resp.headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Assert an `{error, message}` body with the expected status and error.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error);
    assert!(!msg_field.is_empty(), "error message should not be empty");
}
