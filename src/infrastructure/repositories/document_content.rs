use crate::application::ports::document_store::{DocumentStore, FetchOptions};
use crate::domain::errors::DomainResult;
use crate::domain::sitemap::{ContentKind, ContentRepository, ContentResource};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct DocumentContentRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocumentContentRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContentRepository for DocumentContentRepository {
    async fn list_resources(
        &self,
        kind: ContentKind,
        limit: u32,
    ) -> DomainResult<Vec<ContentResource>> {
        let options = FetchOptions::default().with_limit(limit);
        let documents = self.store.fetch_many(kind.collection(), &options).await?;

        let resources = documents
            .into_iter()
            .filter_map(|document| match serde_json::from_value::<ContentResource>(document) {
                Ok(resource) => Some(resource),
                Err(err) => {
                    // Unreadable documents have no usable slug; leave them out.
                    tracing::warn!(collection = %kind, error = %err, "skipping unreadable content document");
                    None
                }
            })
            .collect();
        Ok(resources)
    }
}
