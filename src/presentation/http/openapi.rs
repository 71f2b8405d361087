// src/presentation/http/openapi.rs
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::columns::list_columns,
        crate::presentation::http::controllers::columns::get_column,
        crate::presentation::http::controllers::sitemap::sitemap_xml,
        crate::presentation::http::controllers::sitemap::sitemap_entries,
        crate::presentation::http::controllers::sitemap::robots_txt,
        super::routes::health
    ),
    components(
        schemas(
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::openapi_types::StatusResponse,
            crate::presentation::http::openapi_types::LinkItemSchema,
            crate::presentation::http::openapi_types::AuthorSchema,
            crate::presentation::http::openapi_types::ColumnSchema,
            crate::presentation::http::openapi_types::ColumnResponse,
            crate::presentation::http::openapi_types::ColumnListResponse,
            crate::application::dto::ResponseMeta,
            crate::application::dto::PaginationMeta,
            crate::application::dto::SiteManifestEntryDto
        )
    ),
    tags(
        (name = "Columns", description = "Curated link collections"),
        (name = "Sitemap", description = "Crawler-facing site manifest"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Editorial Core API",
        description = "Public read endpoints of the editorial CMS",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        servers.push(Server::new(url));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

/// Write the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` and return the
/// path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
