// src/infrastructure/repositories/mod.rs
mod document_column;
mod document_content;

pub use document_column::DocumentColumnReadRepository;
pub use document_content::DocumentContentRepository;
