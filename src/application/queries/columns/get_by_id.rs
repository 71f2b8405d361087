use super::ColumnQueryService;
use crate::{
    application::{
        dto::{ColumnDto, DataEnvelope},
        error::{ApplicationError, ApplicationResult},
    },
    domain::column::ColumnId,
};

pub struct GetColumnByIdQuery {
    pub id: i64,
}

impl ColumnQueryService {
    pub async fn get_column_by_id(
        &self,
        query: GetColumnByIdQuery,
    ) -> ApplicationResult<DataEnvelope<ColumnDto>> {
        let id = ColumnId::new(query.id)?;
        let column = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("column {id} not found")))?;
        Ok(DataEnvelope::new(column.into()))
    }
}
