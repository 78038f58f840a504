use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Client;
use url::Url;
use pd_core::http::{ensure_success, key_header};
use pd_core::{parse_json, ContentSource, EndpointConfig, Error, FetchedContent, Result};

/// Reads page content through the get-content extraction API.
pub struct HttpContentSource {
    client: Arc<Client>,
    base_url: Url,
    key_name: HeaderName,
    key_value: HeaderValue,
}

impl HttpContentSource {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        Self::with_client(Arc::new(Client::new()), config)
    }

    pub fn with_client(client: Arc<Client>, config: &EndpointConfig) -> Result<Self> {
        let base_url = Url::parse(&config.url)
            .map_err(|e| Error::Config(format!("invalid get-content URL {:?}: {}", config.url, e)))?;
        let (key_name, key_value) = key_header(config)?;
        Ok(Self {
            client,
            base_url,
            key_name,
            key_value,
        })
    }

    /// The base endpoint with the target appended as the `url` query parameter.
    pub fn request_url(&self, target: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("url", target);
        url
    }
}

impl fmt::Debug for HttpContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpContentSource")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url.as_str())
            .field("key_name", &self.key_name)
            .field("key_value", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, url: &str) -> Result<FetchedContent> {
        let request_url = self.request_url(url);
        tracing::debug!("GET {}", request_url);

        let response = self.client
            .get(request_url)
            .header(self.key_name.clone(), self.key_value.clone())
            .send()
            .await?;
        let body = ensure_success(response).await?.text().await?;

        parse_json("get-content response", &body)
    }
}
