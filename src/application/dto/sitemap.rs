use crate::domain::sitemap::{ChangeFrequency, SiteManifestEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifestEntryDto {
    pub url: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub last_modified: DateTime<Utc>,
    #[schema(value_type = String, example = "weekly")]
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

impl From<SiteManifestEntry> for SiteManifestEntryDto {
    fn from(entry: SiteManifestEntry) -> Self {
        Self {
            url: entry.url,
            last_modified: entry.last_modified,
            change_frequency: entry.change_frequency,
            priority: entry.priority,
        }
    }
}
