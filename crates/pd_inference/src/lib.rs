use std::sync::Arc;
use pd_core::{CompletionModel, Config, Result};

pub mod extract;
pub mod models;

pub use extract::extract;
pub use models::chat::ChatCompletionModel;

/// Builds the completion model described by `config`.
pub fn create_model(config: &Config) -> Result<Arc<dyn CompletionModel>> {
    Ok(Arc::new(ChatCompletionModel::new(config.completion.clone())?))
}

pub mod prelude {
    pub use super::create_model;
    pub use super::extract::extract;
    pub use super::models::chat::ChatCompletionModel;
    pub use pd_core::{CompletionModel, ExtractedResult, FetchedContent, Result, Error};
}
