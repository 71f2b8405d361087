use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{ "data": ..., "meta": ... }` response body shared by the content
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct DataEnvelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

impl<T> DataEnvelope<T> {
    pub const fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    pub const fn with_pagination(data: T, pagination: PaginationMeta) -> Self {
        Self {
            data,
            meta: Some(ResponseMeta { pagination }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResponseMeta {
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub start: u32,
    pub limit: u32,
    /// Number of items in this page.
    pub count: usize,
}
