use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use pd_core::{ContentStore, Result, SavedRecord};

/// Keeps saved records in process memory, one per URL.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<SavedRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<SavedRecord> {
        self.records.read().await.clone()
    }

    pub async fn get(&self, url: &str) -> Option<SavedRecord> {
        self.records.read().await.iter().find(|r| r.url == url).cloned()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn save(&self, record: &SavedRecord) -> Result<String> {
        let mut records = self.records.write().await;
        if let Some(existing) = records.iter_mut().find(|r| r.url == record.url) {
            *existing = record.clone();
        } else {
            records.push(record.clone());
        }
        Ok(serde_json::json!({ "stored": records.len() }).to_string())
    }
}
