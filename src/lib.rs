// src/lib.rs
//! Read side of an editorial CMS: columns of curated links served newest
//! first, plus the crawler-facing sitemap and robots rules.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
