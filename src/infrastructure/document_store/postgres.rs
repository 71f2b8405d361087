// src/infrastructure/document_store/postgres.rs
use super::error::map_sqlx;
use super::relations::{
    DocumentRef, ResolvedDocuments, collect_refs, resolve_relations, strip_relations,
};
use crate::application::ports::document_store::{DocumentStore, FetchOptions};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool, types::Json};
use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::time::Duration;

/// Documents live in one `documents` table keyed by `(collection, id)`, with
/// their attributes in a JSONB `data` column.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
    fetch_timeout: Duration,
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: i64,
    data: Json<Value>,
}

impl DocumentRow {
    fn into_document(self) -> Value {
        let Json(mut data) = self.data;
        if let Value::Object(attributes) = &mut data {
            attributes.insert("id".into(), Value::from(self.id));
        }
        data
    }
}

/// Bound one fetch. An elapsed deadline is reported as a persistence failure.
async fn with_fetch_timeout<T, F>(timeout: Duration, collection: &str, fetch: F) -> DomainResult<T>
where
    F: Future<Output = DomainResult<T>> + Send,
{
    match tokio::time::timeout(timeout, fetch).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(collection, ?timeout, "document fetch timed out");
            Err(DomainError::Persistence(format!(
                "fetching `{collection}` timed out after {}ms",
                timeout.as_millis()
            )))
        }
    }
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool, fetch_timeout: Duration) -> Self {
        Self {
            pool,
            fetch_timeout,
        }
    }

    async fn load_related(
        &self,
        wanted: BTreeMap<String, BTreeSet<i64>>,
    ) -> DomainResult<ResolvedDocuments> {
        let mut resolved = ResolvedDocuments::new();
        for (collection, ids) in wanted {
            let ids: Vec<i64> = ids.into_iter().collect();
            let rows = sqlx::query_as::<_, DocumentRow>(
                "SELECT id, data FROM documents WHERE collection = $1 AND id = ANY($2)",
            )
            .bind(&collection)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

            for row in rows {
                let id = row.id;
                let mut document = row.into_document();
                strip_relations(&mut document);
                resolved.insert(
                    DocumentRef {
                        collection: collection.clone(),
                        id,
                    },
                    document,
                );
            }
        }
        Ok(resolved)
    }

    async fn populate(&self, documents: &mut [Value], options: &FetchOptions) -> DomainResult<()> {
        let wanted = collect_refs(documents, options);
        let resolved = if wanted.is_empty() {
            ResolvedDocuments::new()
        } else {
            self.load_related(wanted).await?
        };

        for document in documents.iter_mut() {
            resolve_relations(document, options, &resolved);
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn fetch_one(
        &self,
        collection: &str,
        id: i64,
        options: &FetchOptions,
    ) -> DomainResult<Option<Value>> {
        with_fetch_timeout(self.fetch_timeout, collection, async {
            let row = sqlx::query_as::<_, DocumentRow>(
                "SELECT id, data FROM documents WHERE collection = $1 AND id = $2",
            )
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

            let Some(row) = row else {
                return Ok(None);
            };
            let mut documents = vec![row.into_document()];
            self.populate(&mut documents, options).await?;
            Ok(documents.pop())
        })
        .await
    }

    async fn fetch_many(
        &self,
        collection: &str,
        options: &FetchOptions,
    ) -> DomainResult<Vec<Value>> {
        with_fetch_timeout(self.fetch_timeout, collection, async {
            let rows = sqlx::query_as::<_, DocumentRow>(
                "SELECT id, data FROM documents WHERE collection = $1
                 ORDER BY id ASC LIMIT $2 OFFSET $3",
            )
            .bind(collection)
            .bind(options.limit.map(i64::from))
            .bind(i64::from(options.start))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

            let mut documents: Vec<Value> =
                rows.into_iter().map(DocumentRow::into_document).collect();
            self.populate(&mut documents, options).await?;
            tracing::debug!(collection, count = documents.len(), "documents fetched");
            Ok(documents)
        })
        .await
    }
}
