use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Response;
use crate::config::EndpointConfig;
use crate::{Error, Result};

/// Turns a non-2xx response into `Error::Http`, keeping the body for the report.
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    tracing::debug!("{} answered {}", response.url(), status);
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Http {
        status: status.as_u16(),
        url,
        body,
    })
}

/// Builds the key header for an endpoint; both the name and the value come
/// from configuration.
pub fn key_header(endpoint: &EndpointConfig) -> Result<(HeaderName, HeaderValue)> {
    let name = HeaderName::from_bytes(endpoint.api_key_header.as_bytes()).map_err(|e| {
        Error::Config(format!("invalid header name {:?}: {}", endpoint.api_key_header, e))
    })?;
    let mut value = HeaderValue::from_str(&endpoint.api_key)
        .map_err(|e| Error::Config(format!("invalid value for header {}: {}", name, e)))?;
    value.set_sensitive(true);
    Ok((name, value))
}
