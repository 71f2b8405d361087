use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ColumnId(i64);

impl ColumnId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("column id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl TryFrom<i64> for ColumnId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColumnId> for i64 {
    fn from(value: ColumnId) -> Self {
        value.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Offset/limit window used when listing columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnListWindow {
    pub start: u32,
    pub limit: u32,
}

impl ColumnListWindow {
    pub const DEFAULT_LIMIT: u32 = 25;
    pub const MAX_LIMIT: u32 = 100;

    /// Clamp a requested page size into `1..=MAX_LIMIT`, treating 0 or a
    /// missing value as the default.
    pub fn new(start: u32, limit: Option<u32>) -> Self {
        let limit = match limit {
            None | Some(0) => Self::DEFAULT_LIMIT,
            Some(value) => value.min(Self::MAX_LIMIT),
        };
        Self { start, limit }
    }
}
