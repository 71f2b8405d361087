// src/presentation/http/controllers/mod.rs
pub mod columns;
pub mod sitemap;
