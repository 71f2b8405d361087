use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::sitemap::{ContentRepository, SiteRoot};

pub const DEFAULT_FETCH_LIMIT: u32 = 1000;

#[derive(Debug, Clone)]
pub struct SitemapSettings {
    pub site_root: SiteRoot,
    /// Upper bound per collection fetch.
    pub fetch_limit: u32,
}

impl Default for SitemapSettings {
    fn default() -> Self {
        Self {
            site_root: SiteRoot::default(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

pub struct SitemapQueryService {
    pub(super) content_repo: Arc<dyn ContentRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: SitemapSettings,
}

impl SitemapQueryService {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        clock: Arc<dyn Clock>,
        settings: SitemapSettings,
    ) -> Self {
        Self {
            content_repo,
            clock,
            settings,
        }
    }

    pub fn site_root(&self) -> &SiteRoot {
        &self.settings.site_root
    }
}
