use std::sync::Arc;

use crate::domain::column::ColumnReadRepository;

pub struct ColumnQueryService {
    pub(super) read_repo: Arc<dyn ColumnReadRepository>,
}

impl ColumnQueryService {
    pub fn new(read_repo: Arc<dyn ColumnReadRepository>) -> Self {
        Self { read_repo }
    }
}
