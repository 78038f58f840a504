use async_trait::async_trait;
use crate::types::FetchedContent;
use crate::Result;

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Retrieve the title and text behind `url`.
    async fn fetch(&self, url: &str) -> Result<FetchedContent>;
}
