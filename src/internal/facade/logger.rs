// src/internal/facade/logger.rs

use std::sync::Arc;

use super::entry::LogEntry;
use super::level::LogLevel;
use super::registry::Registry;
use super::transaction::Transaction;

/// Capability of a component to name itself in log entries
pub trait NameProvider: Send + Sync {
    fn display_name(&self) -> Option<String>;
}

/// Component identified by the tag name of its root element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTag(pub String);

impl NameProvider for ElementTag {
    fn display_name(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Construction options for a [`Logger`]
#[derive(Clone, Default)]
pub struct LoggerOptions {
    pub component: Option<Arc<dyn NameProvider>>,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub transaction: Option<Arc<Transaction>>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component(mut self, component: Arc<dyn NameProvider>) -> Self {
        self.component = Some(component);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn transaction(mut self, transaction: Arc<Transaction>) -> Self {
        self.transaction = Some(transaction);
        self
    }
}

/// Factory of log entries for one component/name/namespace
pub struct Logger {
    component: Option<Arc<dyn NameProvider>>,
    name: Option<String>,
    namespace: Option<String>,
    transaction: Option<Arc<Transaction>>,
    registry: Registry,
}

impl Logger {
    pub fn new(registry: Registry, options: LoggerOptions) -> Self {
        Self {
            component: options.component,
            name: options.name,
            namespace: options.namespace,
            transaction: options.transaction,
            registry,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn error(&self) -> LogEntry {
        self.entry(LogLevel::Error)
    }

    pub fn warn(&self) -> LogEntry {
        self.entry(LogLevel::Warn)
    }

    pub fn info(&self) -> LogEntry {
        self.entry(LogLevel::Info)
    }

    pub fn debug(&self) -> LogEntry {
        self.entry(LogLevel::Debug)
    }

    pub fn fine(&self) -> LogEntry {
        self.entry(LogLevel::Fine)
    }

    pub fn finer(&self) -> LogEntry {
        self.entry(LogLevel::Finer)
    }

    pub fn finest(&self) -> LogEntry {
        self.entry(LogLevel::Finest)
    }

    /// Entry at `level`, bound to this logger's transaction or the current one
    pub fn entry(&self, level: LogLevel) -> LogEntry {
        let transaction = self
            .transaction
            .clone()
            .unwrap_or_else(|| self.registry.current_transaction());

        LogEntry::new(
            level,
            self.component.clone(),
            self.name.clone(),
            self.namespace.clone(),
            transaction,
            self.registry.clone(),
        )
    }
}
