use super::SitemapQueryService;
use crate::{
    application::{dto::SiteManifestEntryDto, error::ApplicationResult},
    domain::sitemap::{
        ContentKind, ManifestCollections, SiteManifestEntry, build_manifest, render_robots,
        render_sitemap_xml, static_pages,
    },
};
use chrono::{DateTime, Utc};

/// Rendered `sitemap.xml` plus the newest `lastmod` it contains.
#[derive(Debug, Clone)]
pub struct SitemapDocument {
    pub xml: String,
    pub last_modified: Option<DateTime<Utc>>,
}

impl SitemapQueryService {
    /// Fetch the three content collections concurrently and assemble the
    /// manifest.
    ///
    /// The build fails as a whole when any fetch fails; the fetches still in
    /// flight are dropped at that point and nothing partial is returned.
    pub async fn build_manifest(&self) -> ApplicationResult<Vec<SiteManifestEntry>> {
        let limit = self.settings.fetch_limit;
        let repo = &self.content_repo;

        let (articles, videos, podcasts) = tokio::try_join!(
            repo.list_resources(ContentKind::Article, limit),
            repo.list_resources(ContentKind::VideoEpisode, limit),
            repo.list_resources(ContentKind::PodcastEpisode, limit),
        )
        .inspect_err(|err| tracing::error!(error = %err, "sitemap collection fetch failed"))?;

        let now = self.clock.now();
        let root = &self.settings.site_root;
        let collections = ManifestCollections {
            articles,
            videos,
            podcasts,
        };
        let entries = build_manifest(root, &collections, static_pages(root, now), now);

        tracing::info!(
            entries = entries.len(),
            articles = collections.articles.len(),
            videos = collections.videos.len(),
            podcasts = collections.podcasts.len(),
            "sitemap manifest built"
        );
        Ok(entries)
    }

    pub async fn manifest_entries(&self) -> ApplicationResult<Vec<SiteManifestEntryDto>> {
        let entries = self.build_manifest().await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    pub async fn sitemap_document(&self) -> ApplicationResult<SitemapDocument> {
        let entries = self.build_manifest().await?;
        let last_modified = entries.iter().map(|entry| entry.last_modified).max();
        Ok(SitemapDocument {
            xml: render_sitemap_xml(&entries),
            last_modified,
        })
    }

    pub fn robots_txt(&self) -> String {
        render_robots(&self.settings.site_root)
    }
}
