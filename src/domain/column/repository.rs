use crate::domain::column::entity::Column;
use crate::domain::column::value_objects::{ColumnId, ColumnListWindow};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read access to columns. Implementations return columns with their links
/// already in presentation order.
#[async_trait]
pub trait ColumnReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ColumnId) -> DomainResult<Option<Column>>;
    async fn list(&self, window: ColumnListWindow) -> DomainResult<Vec<Column>>;
}
