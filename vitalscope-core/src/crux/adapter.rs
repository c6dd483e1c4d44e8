use crate::crux::error::RemoteQueryError;
use crate::crux::types::RemoteRecord;
use async_trait::async_trait;

#[async_trait]
pub trait FetchAdapter: Send + Sync {
    /// Fetches the origin-level record for the origin of `page_url`.
    async fn query(&self, page_url: &str) -> Result<RemoteRecord, RemoteQueryError>;
}
