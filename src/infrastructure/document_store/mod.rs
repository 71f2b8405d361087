// src/infrastructure/document_store/mod.rs
mod error;
mod postgres;
pub mod relations;

pub use postgres::PostgresDocumentStore;
