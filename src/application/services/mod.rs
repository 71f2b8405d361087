// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::time::Clock,
        queries::{
            columns::ColumnQueryService,
            sitemap::{SitemapQueryService, SitemapSettings},
        },
    },
    domain::{column::ColumnReadRepository, sitemap::ContentRepository},
};

pub struct ApplicationServices {
    pub column_queries: Arc<ColumnQueryService>,
    pub sitemap_queries: Arc<SitemapQueryService>,
}

impl ApplicationServices {
    pub fn new(
        column_read_repo: Arc<dyn ColumnReadRepository>,
        content_repo: Arc<dyn ContentRepository>,
        clock: Arc<dyn Clock>,
        sitemap_settings: SitemapSettings,
    ) -> Self {
        let column_queries = Arc::new(ColumnQueryService::new(Arc::clone(&column_read_repo)));
        let sitemap_queries = Arc::new(SitemapQueryService::new(
            Arc::clone(&content_repo),
            Arc::clone(&clock),
            sitemap_settings,
        ));

        Self {
            column_queries,
            sitemap_queries,
        }
    }
}
