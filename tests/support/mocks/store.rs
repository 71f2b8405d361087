// tests/support/mocks/store.rs
use async_trait::async_trait;
use editorial_core::application::ports::document_store::{DocumentStore, FetchOptions};
use editorial_core::domain::errors::{DomainError, DomainResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Documents held per collection, already in their populated shape. Every
/// call is recorded with the options it was made with.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: HashMap<String, Vec<Value>>,
    calls: Mutex<Vec<(String, FetchOptions)>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(mut self, collection: &str, documents: Vec<Value>) -> Self {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
        self
    }

    pub fn calls(&self) -> Vec<(String, FetchOptions)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, collection: &str, options: &FetchOptions) {
        self.calls
            .lock()
            .unwrap()
            .push((collection.to_string(), options.clone()));
    }

    fn documents(&self, collection: &str) -> &[Value] {
        self.collections
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch_one(
        &self,
        collection: &str,
        id: i64,
        options: &FetchOptions,
    ) -> DomainResult<Option<Value>> {
        self.record(collection, options);
        Ok(self
            .documents(collection)
            .iter()
            .find(|doc| doc.get("id").and_then(Value::as_i64) == Some(id))
            .cloned())
    }

    async fn fetch_many(
        &self,
        collection: &str,
        options: &FetchOptions,
    ) -> DomainResult<Vec<Value>> {
        self.record(collection, options);
        let limit = options.limit.map_or(usize::MAX, |limit| limit as usize);
        Ok(self
            .documents(collection)
            .iter()
            .skip(options.start as usize)
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Fails every fetch, optionally only for one collection.
pub struct FailingDocumentStore {
    only: Option<String>,
    inner: InMemoryDocumentStore,
}

impl FailingDocumentStore {
    pub fn always() -> Self {
        Self {
            only: None,
            inner: InMemoryDocumentStore::new(),
        }
    }

    pub fn for_collection(collection: &str, inner: InMemoryDocumentStore) -> Self {
        Self {
            only: Some(collection.to_string()),
            inner,
        }
    }

    fn fails(&self, collection: &str) -> bool {
        self.only.as_deref().is_none_or(|only| only == collection)
    }

    fn error(collection: &str) -> DomainError {
        DomainError::Persistence(format!("upstream unavailable while fetching {collection}"))
    }
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn fetch_one(
        &self,
        collection: &str,
        id: i64,
        options: &FetchOptions,
    ) -> DomainResult<Option<Value>> {
        if self.fails(collection) {
            return Err(Self::error(collection));
        }
        self.inner.fetch_one(collection, id, options).await
    }

    async fn fetch_many(
        &self,
        collection: &str,
        options: &FetchOptions,
    ) -> DomainResult<Vec<Value>> {
        if self.fails(collection) {
            return Err(Self::error(collection));
        }
        self.inner.fetch_many(collection, options).await
    }
}
