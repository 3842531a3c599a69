use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use reqwest::Client as ReqwestClient;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use url::Url;

use crate::{Result, ScoutConfig, ScoutError};

/// Shared HTTP client for listing fetches and document downloads.
///
/// One instance is built per run and shared across all worker tasks, so
/// connection pooling happens inside reqwest.
#[derive(Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    config: Arc<ScoutConfig>,
}

impl HttpClient {
    pub fn new(config: Arc<ScoutConfig>) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();

        for (key, value) in &config.headers {
            headers.insert(
                reqwest::header::HeaderName::from_bytes(key.as_bytes())
                    .map_err(|e| ScoutError::Config(format!("invalid header name: {e}")))?,
                reqwest::header::HeaderValue::from_str(value)
                    .map_err(|e| ScoutError::Config(format!("invalid header value: {e}")))?,
            );
        }

        let client = ReqwestClient::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(
                config.max_redirects as usize,
            ))
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch a response body as text, for HTML directory listings.
    pub async fn fetch_text(&self, url: &Url) -> Result<String> {
        debug!("Fetching listing: {}", url);

        let response = self.client.get(url.as_str()).send().await?;
        let response = response.error_for_status()?;

        Ok(response.text().await?)
    }

    /// Fetch a full response body into memory, enforcing the configured
    /// size cap while streaming. Documents must be fully buffered before
    /// parsing since page boundaries need the whole structure.
    pub async fn fetch_bytes(&self, url: &Url) -> Result<Bytes> {
        let start = Instant::now();

        let response = self.client.get(url.as_str()).send().await?;
        let response = response.error_for_status()?;

        if let Some(content_length) = response.content_length() {
            if content_length > self.config.max_content_size as u64 {
                return Err(ScoutError::ContentTooLarge {
                    size: content_length as usize,
                    max: self.config.max_content_size,
                });
            }
        }

        let max_size = self.config.max_content_size;
        let mut bytes = BytesMut::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;

            if bytes.len() + chunk.len() > max_size {
                return Err(ScoutError::ContentTooLarge {
                    size: bytes.len() + chunk.len(),
                    max: max_size,
                });
            }

            bytes.extend_from_slice(&chunk);
        }

        debug!("Fetched {} bytes from {} in {:?}", bytes.len(), url, start.elapsed());
        Ok(bytes.freeze())
    }
}
