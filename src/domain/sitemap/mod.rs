pub mod builder;
pub mod entity;
pub mod render;
pub mod repository;

pub use builder::{DEFAULT_SITE_URL, SiteRoot, build_manifest, static_pages};
pub use entity::{
    ChangeFrequency, ContentKind, ContentResource, ManifestCollections, SiteManifestEntry,
};
pub use render::{render_robots, render_sitemap_xml};
pub use repository::ContentRepository;
