use crate::domain::model::LinkOutcome;
use async_trait::async_trait;

/// Seam between the importer loop and the HTTP transport. Per-call failures
/// are data (`LinkOutcome`), never `Err`; the importer decides what aborts.
#[async_trait]
pub trait LinkService: Send + Sync {
    async fn create_link(&self, slug: &str, destination: &str) -> LinkOutcome;
}
