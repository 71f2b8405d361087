// src/presentation/http/openapi_types.rs
//! Schema-only types for the OpenAPI document. Column documents carry
//! free-form attributes, so the response DTOs themselves are not `ToSchema`.
use crate::application::dto::ResponseMeta;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    /// `cloudinary` or `local`.
    pub media_provider: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkItemSchema {
    pub label: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    /// Stored value, returned unchanged. Non-text or unparseable dates sort
    /// with the undated links.
    #[schema(example = "2024-03-01T00:00:00Z")]
    pub publish_date: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorSchema {
    pub id: i64,
    pub name: Option<String>,
}

/// A column; other stored attributes appear next to these fields.
#[derive(Debug, Serialize, ToSchema)]
pub struct ColumnSchema {
    pub id: i64,
    pub title: Option<String>,
    /// Newest first. A stored value that is not a list is returned as is.
    pub links: Option<Vec<LinkItemSchema>>,
    pub author: Option<AuthorSchema>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ColumnResponse {
    pub data: ColumnSchema,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ColumnListResponse {
    pub data: Vec<ColumnSchema>,
    pub meta: ResponseMeta,
}
