use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Client;
use url::Url;
use pd_core::http::{ensure_success, key_header};
use pd_core::{ContentStore, EndpointConfig, Error, Result, SavedRecord};

/// Posts records to the save-content API.
pub struct HttpContentStore {
    client: Arc<Client>,
    url: Url,
    key_name: HeaderName,
    key_value: HeaderValue,
}

impl HttpContentStore {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        Self::with_client(Arc::new(Client::new()), config)
    }

    pub fn with_client(client: Arc<Client>, config: &EndpointConfig) -> Result<Self> {
        let url = Url::parse(&config.url)
            .map_err(|e| Error::Config(format!("invalid save-content URL {:?}: {}", config.url, e)))?;
        let (key_name, key_value) = key_header(config)?;
        Ok(Self {
            client,
            url,
            key_name,
            key_value,
        })
    }
}

impl fmt::Debug for HttpContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpContentStore")
            .field("client", &"<reqwest::Client>")
            .field("url", &self.url.as_str())
            .field("key_name", &self.key_name)
            .field("key_value", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn save(&self, record: &SavedRecord) -> Result<String> {
        tracing::debug!("POST {} for {}", self.url, record.url);

        let response = self.client
            .post(self.url.clone())
            .header(self.key_name.clone(), self.key_value.clone())
            .json(record)
            .send()
            .await?;

        Ok(ensure_success(response).await?.text().await?)
    }
}
