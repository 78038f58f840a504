use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;
use pd_core::http::ensure_success;
use pd_core::{ChatMessage, CompletionConfig, CompletionModel, CompletionPayload, Error, FetchedContent, Result};
use super::STOP_SEQUENCE;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Chat-completion client speaking the OpenAI wire format.
pub struct ChatCompletionModel {
    client: Arc<Client>,
    api_url: Url,
    config: CompletionConfig,
}

impl ChatCompletionModel {
    pub fn new(config: CompletionConfig) -> Result<Self> {
        Self::with_client(Arc::new(Client::new()), config)
    }

    pub fn with_client(client: Arc<Client>, config: CompletionConfig) -> Result<Self> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| Error::Config(format!("invalid completion URL {:?}: {}", config.api_url, e)))?;
        Ok(Self { client, api_url, config })
    }

    /// The user message is the instruction, a blank line, then the page text.
    pub fn build_payload(&self, content: &FetchedContent) -> CompletionPayload {
        CompletionPayload {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![
                ChatMessage::system(self.config.system_prompt.as_str()),
                ChatMessage::user(format!("{}\n\n{}", self.config.instruction, content.text)),
            ],
            stream: false,
            stop: vec![STOP_SEQUENCE.to_string()],
        }
    }
}

impl fmt::Debug for ChatCompletionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionModel")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl CompletionModel for ChatCompletionModel {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, content: &FetchedContent) -> Result<String> {
        println!("system prompt:\n{}", self.config.system_prompt);
        println!("user instruction:\n{}", self.config.instruction);

        let payload = self.build_payload(content);
        let body = serde_json::to_vec(&payload)
            .map_err(|e| Error::from_json("completion request", e))?;
        tracing::debug!("POST {} ({} bytes, model {})", self.api_url, body.len(), payload.model);

        let response = self.client
            .post(self.api_url.clone())
            .header(CONTENT_TYPE, JSON_UTF8)
            .bearer_auth(&self.config.api_key)
            .body(body)
            .send()
            .await?;

        Ok(ensure_success(response).await?.text().await?)
    }
}
