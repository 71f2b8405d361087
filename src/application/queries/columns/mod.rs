mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetColumnByIdQuery;
pub use list::ListColumnsQuery;
pub use service::ColumnQueryService;
