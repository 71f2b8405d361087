// src/domain/sitemap/entity.rs
use crate::domain::publish_date::parse_publish_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One addressable page in the site manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteManifestEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// The editorial collections that have public pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Article,
    VideoEpisode,
    PodcastEpisode,
    NewsletterIssue,
}

impl ContentKind {
    /// Collection name in the document store.
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Article => "articles",
            Self::VideoEpisode => "video-episodes",
            Self::PodcastEpisode => "podcast-episodes",
            Self::NewsletterIssue => "newsletter-issues",
        }
    }

    /// Public path under the site root, without a trailing slash.
    pub const fn path_prefix(self) -> &'static str {
        match self {
            Self::Article => "/articoli",
            Self::VideoEpisode => "/video",
            Self::PodcastEpisode => "/podcast",
            Self::NewsletterIssue => "/newsletter",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// The slice of a content document the manifest cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResource {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
}

impl ContentResource {
    pub fn new(slug: Option<&str>, publish_date: Option<&str>) -> Self {
        Self {
            slug: slug.map(str::to_owned),
            publish_date: publish_date.map(str::to_owned),
        }
    }

    /// The slug, when present and not blank.
    pub fn public_slug(&self) -> Option<&str> {
        self.slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.publish_date.as_deref().and_then(parse_publish_date)
    }
}

/// Content slices fetched for one manifest build.
#[derive(Debug, Clone, Default)]
pub struct ManifestCollections {
    pub articles: Vec<ContentResource>,
    pub videos: Vec<ContentResource>,
    pub podcasts: Vec<ContentResource>,
}
