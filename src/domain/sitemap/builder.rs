// src/domain/sitemap/builder.rs
use crate::domain::sitemap::entity::{
    ChangeFrequency, ContentKind, ContentResource, ManifestCollections, SiteManifestEntry,
};
use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::fmt;

pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

const CONTENT_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Weekly;
const CONTENT_PRIORITY: f32 = 0.8;

/// Bytes escaped when a slug becomes one path segment; `/` included.
const SLUG_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Absolute base url of the public site, stored without trailing slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoot(String);

impl SiteRoot {
    /// Falls back to [`DEFAULT_SITE_URL`] when `raw` is missing or blank.
    pub fn new(raw: Option<&str>) -> Self {
        let trimmed = raw
            .map(|value| value.trim().trim_end_matches('/'))
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_SITE_URL);
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join an absolute site path (`""` or `/...`) onto the root.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl Default for SiteRoot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Display for SiteRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hand-authored top-level sections, ranked by editorial importance.
const STATIC_PAGES: [(&str, ChangeFrequency, f32); 9] = [
    ("", ChangeFrequency::Daily, 1.0),
    ("/articoli", ChangeFrequency::Daily, 0.9),
    ("/video", ChangeFrequency::Weekly, 0.8),
    ("/podcast", ChangeFrequency::Weekly, 0.8),
    ("/newsletter", ChangeFrequency::Weekly, 0.8),
    ("/archivio", ChangeFrequency::Weekly, 0.7),
    ("/abbonati", ChangeFrequency::Monthly, 0.7),
    ("/chi-siamo", ChangeFrequency::Monthly, 0.6),
    ("/partner", ChangeFrequency::Monthly, 0.6),
];

pub fn static_pages(root: &SiteRoot, now: DateTime<Utc>) -> Vec<SiteManifestEntry> {
    STATIC_PAGES
        .iter()
        .map(|&(path, change_frequency, priority)| SiteManifestEntry {
            url: root.join(path),
            last_modified: now,
            change_frequency,
            priority,
        })
        .collect()
}

fn content_entries<'a>(
    root: &'a SiteRoot,
    kind: ContentKind,
    resources: &'a [ContentResource],
    now: DateTime<Utc>,
) -> impl Iterator<Item = SiteManifestEntry> + 'a {
    resources.iter().filter_map(move |resource| {
        let Some(slug) = resource.public_slug() else {
            tracing::debug!(collection = %kind, "skipping resource without slug");
            return None;
        };
        Some(SiteManifestEntry {
            url: format!(
                "{}{}/{}",
                root,
                kind.path_prefix(),
                utf8_percent_encode(slug, SLUG_SEGMENT)
            ),
            // Undated resources report the build time.
            last_modified: resource.published_at().unwrap_or(now),
            change_frequency: CONTENT_CHANGE_FREQUENCY,
            priority: CONTENT_PRIORITY,
        })
    })
}

/// Assemble the manifest: static pages, then articles, videos and podcasts
/// in that order. Collections are disjoint by path prefix, so no
/// deduplication is performed.
pub fn build_manifest(
    root: &SiteRoot,
    collections: &ManifestCollections,
    static_pages: Vec<SiteManifestEntry>,
    now: DateTime<Utc>,
) -> Vec<SiteManifestEntry> {
    let mut entries = static_pages;
    entries.extend(content_entries(
        root,
        ContentKind::Article,
        &collections.articles,
        now,
    ));
    entries.extend(content_entries(
        root,
        ContentKind::VideoEpisode,
        &collections.videos,
        now,
    ));
    entries.extend(content_entries(
        root,
        ContentKind::PodcastEpisode,
        &collections.podcasts,
        now,
    ));
    entries
}
