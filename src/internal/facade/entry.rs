// src/internal/facade/entry.rs

use std::error::Error;
use std::sync::Arc;

use tracing::debug;

use super::level::LogLevel;
use super::logger::NameProvider;
use super::payload::{LogPayload, WebContext, FACADE_VERSION};
use super::registry::Registry;
use super::transaction::Transaction;
use crate::internal::backend::{BackendError, LogRequest};
use crate::internal::page::LocationSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to serialize log payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Log submission failed: {0}")]
    Backend(#[from] BackendError),
}

/// A single leveled log record waiting for its message.
///
/// Created by one of the [`Logger`](super::Logger) level methods and consumed
/// by [`log`](LogEntry::log), which submits exactly one payload.
pub struct LogEntry {
    level: LogLevel,
    component: Option<Arc<dyn NameProvider>>,
    name: Option<String>,
    namespace: Option<String>,
    transaction: Arc<Transaction>,
    registry: Registry,
}

impl LogEntry {
    pub(crate) fn new(
        level: LogLevel,
        component: Option<Arc<dyn NameProvider>>,
        name: Option<String>,
        namespace: Option<String>,
        transaction: Arc<Transaction>,
        registry: Registry,
    ) -> Self {
        Self {
            level,
            component,
            name,
            namespace,
            transaction,
            registry,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn transaction(&self) -> &Arc<Transaction> {
        &self.transaction
    }

    /// Bind this entry to a different transaction
    pub fn with_transaction(mut self, transaction: Arc<Transaction>) -> Self {
        self.transaction = transaction;
        self
    }

    /// Hook for attaching an error to the entry; currently records nothing.
    pub fn add_error(&mut self, _error: &dyn Error) {}

    /// Component-derived name, else the logger's logical name
    pub fn display_name(&self) -> Option<String> {
        self.component
            .as_ref()
            .and_then(|component| component.display_name())
            .filter(|name| !name.is_empty())
            .or_else(|| self.name.clone())
    }

    /// Resolve the transaction and snapshot the page into a payload
    pub async fn build_payload(&self, message: &str) -> LogPayload {
        let name = self.display_name();
        let transaction_id = self.transaction.resolve_identifier().await;
        let location = LocationSnapshot::capture(&self.registry.page().current_url());

        LogPayload {
            name,
            log_level: self.level,
            message: message.to_string(),
            namespace: self.namespace.clone(),
            transaction_id,
            version: FACADE_VERSION,
            web: WebContext { location },
        }
    }

    /// Submit the entry with `message`, mirroring to the console if the backend asks to
    pub async fn log(self, message: impl Into<String>) -> Result<(), LogError> {
        let message = message.into();
        let payload = self.build_payload(&message).await;
        let data = payload.to_json()?;

        let response = self.registry.backend().log(LogRequest { data }).await?;
        debug!(
            level = %self.level,
            transaction_id = %payload.transaction_id,
            mirrored = response.is_web_console_debug_enabled,
            "Log submitted"
        );

        if response.is_web_console_debug_enabled {
            self.registry
                .console()
                .write(self.level.console_channel(), &response.web_console_log);
        }
        Ok(())
    }
}
