mod build;
mod service;

pub use build::SitemapDocument;
pub use service::{SitemapQueryService, SitemapSettings};
