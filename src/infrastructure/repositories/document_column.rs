// src/infrastructure/repositories/document_column.rs
use crate::application::ports::document_store::{DocumentStore, FetchOptions};
use crate::domain::column::{
    Column, ColumnId, ColumnListWindow, ColumnReadRepository, normalize_column, normalize_columns,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Column reads over the document store.
///
/// This is the single place where link order is applied: every column that
/// leaves this repository has its links sorted newest-first.
#[derive(Clone)]
pub struct DocumentColumnReadRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocumentColumnReadRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn fetch_options() -> FetchOptions {
        FetchOptions::populate([Column::LINKS_RELATION, Column::AUTHOR_RELATION])
    }
}

#[async_trait]
impl ColumnReadRepository for DocumentColumnReadRepository {
    async fn find_by_id(&self, id: ColumnId) -> DomainResult<Option<Column>> {
        let document = self
            .store
            .fetch_one(Column::COLLECTION, id.into(), &Self::fetch_options())
            .await?;

        document
            .map(Column::from_document)
            .transpose()
            .map(|column| column.as_ref().map(normalize_column))
    }

    async fn list(&self, window: ColumnListWindow) -> DomainResult<Vec<Column>> {
        let options = Self::fetch_options()
            .with_start(window.start)
            .with_limit(window.limit);
        let documents = self.store.fetch_many(Column::COLLECTION, &options).await?;

        let columns = documents
            .into_iter()
            .map(Column::from_document)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(normalize_columns(&columns))
    }
}
