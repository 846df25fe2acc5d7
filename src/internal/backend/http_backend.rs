// src/internal/backend/http_backend.rs

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use super::{BackendError, LogBackend, LogRequest, LogResponse};
use crate::internal::config::BackendConfig;

/// LogBackend speaking JSON over HTTP
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    transaction_url: Url,
    log_url: Url,
}

impl HttpBackend {
    /// Create a new HttpBackend from the backend section of the config
    pub fn new(cfg: &BackendConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in &cfg.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .with_context(|| format!("Invalid header name: {}", key))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header {}", key))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        let base = cfg.base_url.trim_end_matches('/');
        let transaction_url = Url::parse(&format!("{}{}", base, cfg.transaction_path))
            .context("Invalid transaction endpoint")?;
        let log_url =
            Url::parse(&format!("{}{}", base, cfg.log_path)).context("Invalid log endpoint")?;

        Ok(Self {
            client,
            transaction_url,
            log_url,
        })
    }

    async fn check_status(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl LogBackend for HttpBackend {
    async fn create_transaction_id(&self) -> Result<String, BackendError> {
        debug!("Requesting transaction id from {}", self.transaction_url);
        let response = self.client.post(self.transaction_url.clone()).send().await?;
        let id: String = Self::check_status(response).await?.json().await?;
        Ok(id)
    }

    async fn log(&self, request: LogRequest) -> Result<LogResponse, BackendError> {
        debug!("Submitting {} byte log payload to {}", request.data.len(), self.log_url);
        let response = self
            .client
            .post(self.log_url.clone())
            .json(&request)
            .send()
            .await?;
        let log_response = Self::check_status(response).await?.json().await?;
        Ok(log_response)
    }
}
