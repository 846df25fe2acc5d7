// src/internal/backend/mod.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http_backend;
#[cfg(feature = "test-utils")]
pub mod mock;

pub use http_backend::HttpBackend;

/// Body of a log submission: the serialized payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub data: String,
}

/// Backend verdict on a submitted log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogResponse {
    #[serde(default)]
    pub is_web_console_debug_enabled: bool,
    #[serde(default)]
    pub web_console_log: String,
}

/// Remote collaborator issuing transaction ids and accepting log submissions
#[async_trait]
pub trait LogBackend: Send + Sync {
    /// Issue a fresh transaction identifier
    async fn create_transaction_id(&self) -> Result<String, BackendError>;

    /// Submit one serialized log payload
    async fn log(&self, request: LogRequest) -> Result<LogResponse, BackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Backend rejected the call: {0}")]
    Rejected(String),
}
