use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Content returned by the get-content API. Fields other than `title` and
/// `text` are kept in `extra` but never forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedContent {
    pub title: String,
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionPayload {
    pub model: String,
    pub max_tokens: i64,
    pub temperature: f64,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub stop: Vec<String>,
}

/// The model's answer once unwrapped from the chat envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedResult {
    pub summary: String,
    pub categories: Value,
}

/// The record handed to the save API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub url: String,
    pub title: String,
    pub text: String,
    pub summary: String,
    pub categories: Value,
}

impl SavedRecord {
    pub fn assemble(url: &str, content: FetchedContent, result: ExtractedResult) -> Self {
        Self {
            url: url.to_string(),
            title: content.title,
            text: content.text,
            summary: result.summary,
            categories: result.categories,
        }
    }
}
