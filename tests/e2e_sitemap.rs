// tests/e2e_sitemap.rs
use axum::http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

mod support;

use support::{FailingDocumentStore, InMemoryDocumentStore, TEST_SITE_URL, content_doc};

const STATIC_PAGE_COUNT: usize = 9;

fn content_store() -> InMemoryDocumentStore {
    InMemoryDocumentStore::new()
        .with_documents(
            "articles",
            vec![
                content_doc(1, Some("a"), Some("2024-03-01")),
                content_doc(2, None, None),
            ],
        )
        .with_documents("video-episodes", vec![])
        .with_documents("podcast-episodes", vec![])
}

#[tokio::test]
async fn json_manifest_lists_static_pages_and_published_content() {
    let app = support::make_test_router(Arc::new(content_store()));

    let resp = support::get(app, "/api/sitemap").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::body_json(resp).await;
    let entries = body.as_array().unwrap();

    assert_eq!(entries.len(), STATIC_PAGE_COUNT + 1);
    assert_eq!(entries[0]["url"], json!(TEST_SITE_URL));
    assert_eq!(entries[0]["changeFrequency"], json!("daily"));

    let article: Vec<&Value> = entries
        .iter()
        .filter(|entry| entry["url"].as_str().unwrap().contains("/articoli/"))
        .collect();
    assert_eq!(article.len(), 1);
    assert_eq!(article[0]["url"], json!(format!("{TEST_SITE_URL}/articoli/a")));
    assert_eq!(article[0]["lastModified"], json!("2024-03-01T00:00:00Z"));
    assert_eq!(article[0]["changeFrequency"], json!("weekly"));
}

#[tokio::test]
async fn xml_sitemap_has_content_type_and_last_modified() {
    let app = support::make_test_router(Arc::new(content_store()));

    let resp = support::get(app, "/sitemap.xml").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(support::content_type(&resp).starts_with("application/xml"));
    // newest lastmod is the fixed clock used for static pages
    assert_eq!(
        resp.headers().get("last-modified").unwrap(),
        "Sat, 01 Jun 2024 12:00:00 GMT"
    );

    let xml = support::body_text(resp).await;
    assert!(xml.starts_with("<?xml"));
    assert_eq!(xml.matches("<url>").count(), STATIC_PAGE_COUNT + 1);
    assert!(xml.contains(&format!("<loc>{TEST_SITE_URL}/articoli/a</loc>")));
    assert!(xml.contains("<lastmod>2024-03-01T00:00:00Z</lastmod>"));
}

#[tokio::test]
async fn failed_collection_fails_the_whole_sitemap() {
    let store = FailingDocumentStore::for_collection("podcast-episodes", content_store());

    let app = support::make_test_router(Arc::new(store));
    let resp = support::get(app, "/sitemap.xml").await;
    support::assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        .await;
}

#[tokio::test]
async fn failed_collection_fails_the_json_manifest() {
    let store = FailingDocumentStore::for_collection("video-episodes", content_store());

    let app = support::make_test_router(Arc::new(store));
    let resp = support::get(app, "/api/sitemap").await;
    support::assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        .await;
}

#[tokio::test]
async fn robots_points_at_the_sitemap() {
    let app = support::make_test_router(Arc::new(InMemoryDocumentStore::new()));

    let resp = support::get(app, "/robots.txt").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(support::content_type(&resp).starts_with("text/plain"));
    let text = support::body_text(resp).await;
    assert!(text.contains("Disallow: /api/"));
    assert!(text.contains(&format!("Sitemap: {TEST_SITE_URL}/sitemap.xml")));
}

#[tokio::test]
async fn sitemap_fetches_are_bounded() {
    let store = Arc::new(content_store());
    let app = support::make_test_router(store.clone());

    let resp = support::get(app, "/api/sitemap").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let mut collections: Vec<String> = store
        .calls()
        .into_iter()
        .map(|(collection, options)| {
            assert_eq!(options.limit, Some(1000));
            collection
        })
        .collect();
    collections.sort();
    assert_eq!(collections, ["articles", "podcast-episodes", "video-episodes"]);
}
