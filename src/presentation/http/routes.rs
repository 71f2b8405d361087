// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{columns, sitemap},
    middleware::rate_limit::public_read_limit_layer,
    openapi::serve_openapi,
    openapi_types::StatusResponse,
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Build the router, optionally without the per-IP limiter (which needs the
/// peer address from `ConnectInfo` or forwarding headers).
pub fn build_router_with_rate_limiter(state: HttpState, rate_limited: bool) -> Router {
    let mut public = Router::new()
        .route("/api/columns", get(columns::list_columns))
        .route("/api/columns/{id}", get(columns::get_column))
        .route("/api/sitemap", get(sitemap::sitemap_entries))
        .route("/sitemap.xml", get(sitemap::sitemap_xml))
        .route("/robots.txt", get(sitemap::robots_txt));

    if rate_limited {
        public = public.layer(public_read_limit_layer());
    }

    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(serve_openapi))
        .merge(public)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi_types::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
        media_provider: state.media_provider.name().into(),
    })
}
