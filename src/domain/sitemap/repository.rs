use crate::domain::errors::DomainResult;
use crate::domain::sitemap::entity::{ContentKind, ContentResource};
use async_trait::async_trait;

#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetch up to `limit` resources of one kind. The limit is a safety
    /// bound, not pagination: callers pass a value large enough to cover the
    /// whole collection.
    async fn list_resources(
        &self,
        kind: ContentKind,
        limit: u32,
    ) -> DomainResult<Vec<ContentResource>>;
}
