// tests/support/mocks/content.rs
use async_trait::async_trait;
use editorial_core::domain::errors::{DomainError, DomainResult};
use editorial_core::domain::sitemap::{ContentKind, ContentRepository, ContentResource};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::Barrier;

/// How a stubbed collection answers.
#[derive(Clone)]
pub enum Reply {
    Resources(Vec<ContentResource>),
    Fail,
    /// Never completes.
    Pending,
}

/// Answers per content kind; kinds without a reply return nothing.
#[derive(Default)]
pub struct StubContentRepo {
    replies: HashMap<ContentKind, Reply>,
    limits: Mutex<Vec<(ContentKind, u32)>>,
}

impl StubContentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, kind: ContentKind, reply: Reply) -> Self {
        self.replies.insert(kind, reply);
        self
    }

    pub fn requested_limits(&self) -> Vec<(ContentKind, u32)> {
        self.limits.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentRepository for StubContentRepo {
    async fn list_resources(
        &self,
        kind: ContentKind,
        limit: u32,
    ) -> DomainResult<Vec<ContentResource>> {
        self.limits.lock().unwrap().push((kind, limit));
        match self.replies.get(&kind).cloned() {
            None => Ok(Vec::new()),
            Some(Reply::Resources(resources)) => Ok(resources),
            Some(Reply::Fail) => Err(DomainError::Persistence(format!("{kind} unavailable"))),
            Some(Reply::Pending) => std::future::pending().await,
        }
    }
}

/// Every fetch waits until all three collections have been requested, so a
/// build only completes when the fetches run concurrently.
pub struct BarrierContentRepo {
    barrier: Barrier,
}

impl BarrierContentRepo {
    pub fn new() -> Self {
        Self {
            barrier: Barrier::new(3),
        }
    }
}

#[async_trait]
impl ContentRepository for BarrierContentRepo {
    async fn list_resources(
        &self,
        kind: ContentKind,
        _limit: u32,
    ) -> DomainResult<Vec<ContentResource>> {
        self.barrier.wait().await;
        Ok(vec![ContentResource::new(
            Some(&format!("{kind}-one")),
            Some("2024-02-01T00:00:00Z"),
        )])
    }
}
