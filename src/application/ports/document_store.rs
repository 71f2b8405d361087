// src/application/ports/document_store.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use serde_json::Value;

/// Options for a document fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Relations to resolve. Relations not named here are left out of the
    /// returned documents.
    pub populate: Vec<String>,
    pub limit: Option<u32>,
    pub start: u32,
}

impl FetchOptions {
    pub fn populate<I, S>(relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            populate: relations.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    pub fn populates(&self, relation: &str) -> bool {
        self.populate.iter().any(|name| name == relation)
    }
}

/// Generic document access. Documents are JSON objects carrying their
/// numeric `id` next to their attributes.
///
/// Implementations enforce their own timeout and report every failure as a
/// single error; callers do not retry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn fetch_one(
        &self,
        collection: &str,
        id: i64,
        options: &FetchOptions,
    ) -> DomainResult<Option<Value>>;

    async fn fetch_many(&self, collection: &str, options: &FetchOptions)
    -> DomainResult<Vec<Value>>;
}
