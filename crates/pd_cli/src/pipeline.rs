use std::sync::Arc;
use pd_core::logging::Logger;
use pd_core::{CompletionModel, Config, ContentSource, ContentStore, Error, Result, SavedRecord};
use pd_fetch::HttpContentSource;

/// Runs fetch, completion, extraction and save for one URL, in that order.
/// The first failing stage ends the run; nothing after it is attempted.
pub struct Pipeline {
    source: Arc<dyn ContentSource>,
    model: Arc<dyn CompletionModel>,
    store: Arc<dyn ContentStore>,
    logger: Logger,
}

impl Pipeline {
    pub fn new(
        source: Arc<dyn ContentSource>,
        model: Arc<dyn CompletionModel>,
        store: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            source,
            model,
            store,
            logger: Logger::new().with_prefix("[pipeline]"),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let source = Arc::new(HttpContentSource::new(&config.get_content)?);
        let model = pd_inference::create_model(config)?;
        let store = pd_storage::create_store(config)?;
        Ok(Self::new(source, model, store))
    }

    pub async fn run(&self, url: &str) -> Result<SavedRecord> {
        if url.is_empty() {
            return Err(Error::InvalidUrl("URL cannot be empty".to_string()));
        }
        println!("Received url: {}", url);

        self.logger.info("📥 fetching content");
        let content = self.source.fetch(url).await?;
        println!("Parsed text with title: {}", content.title);

        self.logger.info(&format!("🧠 requesting completion from {}", self.model.name()));
        let raw = self.model.complete(&content).await?;
        println!("Received ai response:\n{}", raw);

        let result = pd_inference::extract(&raw)?;
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|e| Error::from_json("extracted result", e))?;
        println!("Extracted ai response:\n{}", rendered);

        let record = SavedRecord::assemble(url, content, result);
        self.logger.info("💾 saving record");
        let answer = self.store.save(&record).await?;
        self.logger.debug(&format!("save endpoint answered: {}", answer));

        println!("SUCCESS");
        Ok(record)
    }
}
