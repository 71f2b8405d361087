// src/application/ports/mod.rs
pub mod document_store;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type DocumentStorePort = dyn document_store::DocumentStore;
pub type ClockPort = dyn time::Clock;
