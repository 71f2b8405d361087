use super::ColumnQueryService;
use crate::{
    application::{
        dto::{ColumnDto, DataEnvelope, PaginationMeta},
        error::ApplicationResult,
    },
    domain::column::ColumnListWindow,
};

pub struct ListColumnsQuery {
    pub start: u32,
    pub limit: Option<u32>,
}

impl ColumnQueryService {
    pub async fn list_columns(
        &self,
        query: ListColumnsQuery,
    ) -> ApplicationResult<DataEnvelope<Vec<ColumnDto>>> {
        let window = ColumnListWindow::new(query.start, query.limit);
        let columns = self.read_repo.list(window).await?;

        let pagination = PaginationMeta {
            start: window.start,
            limit: window.limit,
            count: columns.len(),
        };
        let items = columns.into_iter().map(Into::into).collect();
        Ok(DataEnvelope::with_pagination(items, pagination))
    }
}
