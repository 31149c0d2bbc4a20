use crate::config::TransportConfig;
use crate::error::TransportError;

use super::{RawResponse, Transport};

/// A [`Transport`] issuing HTTP GET requests with reqwest.
///
/// Relative targets are joined onto `base_url`; targets that already carry
/// an `http://` or `https://` scheme are requested as-is.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    pub base_url: String,
    pub inner_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &TransportConfig) -> Result<Self, TransportError> {
        let inner_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            base_url: config.base_url.clone(),
            inner_client,
        })
    }

    fn format_url(&self, target: &str) -> String {
        if target.starts_with("http://") || target.starts_with("https://") {
            return target.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = target.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, target: &str) -> Result<RawResponse, TransportError> {
        let response = self
            .inner_client
            .get(self.format_url(target))
            .send()
            .await?;
        let status = response.status().as_u16();

        // Fully buffered; no streaming
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
