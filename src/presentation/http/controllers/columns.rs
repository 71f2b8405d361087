// src/presentation/http/controllers/columns.rs
use crate::application::{
    dto::{ColumnDto, DataEnvelope},
    queries::columns::{GetColumnByIdQuery, ListColumnsQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ColumnListParams {
    /// Offset of the first column.
    #[serde(default)]
    pub start: u32,
    /// Page size, 25 by default and at most 100.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/columns",
    params(ColumnListParams),
    responses(
        (status = 200, description = "Columns with their links newest first.", body = crate::presentation::http::openapi_types::ColumnListResponse),
        (status = 500, description = "Document store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Columns"
)]
pub async fn list_columns(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ColumnListParams>,
) -> HttpResult<Json<DataEnvelope<Vec<ColumnDto>>>> {
    let envelope = state
        .services
        .column_queries
        .list_columns(ListColumnsQuery {
            start: params.start,
            limit: params.limit,
        })
        .await
        .into_http()?;

    Ok(Json(envelope))
}

#[utoipa::path(
    get,
    path = "/api/columns/{id}",
    params(
        ("id" = i64, Path, description = "Column id")
    ),
    responses(
        (status = 200, description = "One column with its links newest first.", body = crate::presentation::http::openapi_types::ColumnResponse),
        (status = 400, description = "Id is not a positive integer.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such column.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Document store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Columns"
)]
pub async fn get_column(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<Json<DataEnvelope<ColumnDto>>> {
    let id = raw_id
        .parse::<i64>()
        .map_err(|_| HttpError::bad_request(format!("invalid column id '{raw_id}'")))?;

    let envelope = state
        .services
        .column_queries
        .get_column_by_id(GetColumnByIdQuery { id })
        .await
        .into_http()?;

    Ok(Json(envelope))
}
