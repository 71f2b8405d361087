pub mod database;
pub mod document_store;
pub mod repositories;
pub mod time;
