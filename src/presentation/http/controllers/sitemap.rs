// src/presentation/http/controllers/sitemap.rs
use crate::application::dto::SiteManifestEntryDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use std::time::SystemTime;

const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "Sitemap of static pages and published content.", content_type = "application/xml", body = String),
        (status = 500, description = "A content collection could not be fetched.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Sitemap"
)]
pub async fn sitemap_xml(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let document = state
        .services
        .sitemap_queries
        .sitemap_document()
        .await
        .into_http()?;

    let mut response = (
        [(header::CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE))],
        document.xml,
    )
        .into_response();

    if let Some(last_modified) = document.last_modified {
        let value = httpdate::fmt_http_date(SystemTime::from(last_modified));
        if let Ok(value) = HeaderValue::from_str(&value) {
            response.headers_mut().insert(header::LAST_MODIFIED, value);
        }
    }

    Ok(response)
}

#[utoipa::path(
    get,
    path = "/api/sitemap",
    responses(
        (status = 200, description = "Sitemap entries as JSON.", body = [SiteManifestEntryDto]),
        (status = 500, description = "A content collection could not be fetched.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Sitemap"
)]
pub async fn sitemap_entries(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<SiteManifestEntryDto>>> {
    let entries = state
        .services
        .sitemap_queries
        .manifest_entries()
        .await
        .into_http()?;

    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/robots.txt",
    responses(
        (status = 200, description = "Crawler rules pointing at the sitemap.", content_type = "text/plain", body = String)
    ),
    tag = "Sitemap"
)]
pub async fn robots_txt(Extension(state): Extension<HttpState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_CONTENT_TYPE))],
        state.services.sitemap_queries.robots_txt(),
    )
}
