pub mod columns;
pub mod sitemap;
