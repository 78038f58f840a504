use async_trait::async_trait;
use crate::types::FetchedContent;
use crate::Result;

#[async_trait]
pub trait CompletionModel: Send + Sync {
    fn name(&self) -> &str;

    /// Send the fetched text to the model and return the raw response body.
    async fn complete(&self, content: &FetchedContent) -> Result<String>;
}
