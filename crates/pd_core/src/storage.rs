use async_trait::async_trait;
use crate::types::SavedRecord;
use crate::Result;

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Persist a record, returning whatever the backend answered.
    async fn save(&self, record: &SavedRecord) -> Result<String>;
}
