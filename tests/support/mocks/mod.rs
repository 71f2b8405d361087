// tests/support/mocks/mod.rs
pub mod content;
pub mod store;
pub mod time;

pub use content::{BarrierContentRepo, Reply, StubContentRepo};
pub use store::{FailingDocumentStore, InMemoryDocumentStore};
pub use time::{FixedClock, fixed_now};
