pub mod columns;
pub mod envelope;
pub mod serde_time;
pub mod sitemap;

pub use columns::{AuthorDto, ColumnDto, ColumnLinksDto, LinkItemDto};
pub use envelope::{DataEnvelope, PaginationMeta, ResponseMeta};
pub use sitemap::SiteManifestEntryDto;
