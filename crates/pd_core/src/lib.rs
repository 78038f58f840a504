pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod source;
pub mod storage;
pub mod types;

pub use config::{CompletionConfig, Config, EndpointConfig};
pub use error::{parse_json, Error, Result};
pub use models::CompletionModel;
pub use source::ContentSource;
pub use storage::ContentStore;
pub use types::{ChatMessage, CompletionPayload, ExtractedResult, FetchedContent, SavedRecord};
