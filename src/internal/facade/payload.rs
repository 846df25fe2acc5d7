// src/internal/facade/payload.rs

use serde::Serialize;

use super::level::LogLevel;
use crate::internal::page::LocationSnapshot;

/// Version tag stamped on every submitted payload
pub const FACADE_VERSION: &str = "0.1-beta";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebContext {
    pub location: LocationSnapshot,
}

/// One log record as submitted to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub log_level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub transaction_id: String,
    pub version: &'static str,
    pub web: WebContext,
}

impl LogPayload {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
