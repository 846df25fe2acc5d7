// src/internal/facade/registry.rs

use std::sync::{Arc, OnceLock};

use anyhow::Context;
use tracing::info;

use super::logger::{Logger, LoggerOptions};
use super::transaction::Transaction;
use crate::internal::backend::{HttpBackend, LogBackend};
use crate::internal::config::AppConfig;
use crate::internal::console::{create_console, Console};
use crate::internal::page::{Page, PageSource};

/// Composition root shared by every logger of a session.
///
/// Owns the collaborators and the session transaction, which is created
/// exactly once when the registry is built.
#[derive(Clone)]
pub struct Registry {
    backend: Arc<dyn LogBackend>,
    console: Arc<dyn Console>,
    page: Arc<dyn PageSource>,
    current: Arc<Transaction>,
}

impl Registry {
    pub fn new(
        backend: Arc<dyn LogBackend>,
        console: Arc<dyn Console>,
        page: Arc<dyn PageSource>,
    ) -> Self {
        let current = Arc::new(Transaction::new(backend.clone(), console.clone()));
        Self {
            backend,
            console,
            page,
            current,
        }
    }

    /// Wire an HTTP backend, the configured console and a page at the configured URL
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let backend = HttpBackend::new(&cfg.backend)?;
        let page = Page::parse(&cfg.page.url)
            .with_context(|| format!("Invalid page URL: {}", cfg.page.url))?;
        info!("Logging to backend at {}", cfg.backend.base_url);

        Ok(Self::new(
            Arc::new(backend),
            create_console(&cfg.console.kind),
            Arc::new(page),
        ))
    }

    /// The session-wide transaction
    pub fn current_transaction(&self) -> Arc<Transaction> {
        self.current.clone()
    }

    /// A new transaction, independent of the session-wide one
    pub fn create_transaction(&self) -> Arc<Transaction> {
        Arc::new(Transaction::new(self.backend.clone(), self.console.clone()))
    }

    pub fn logger(&self, options: LoggerOptions) -> Logger {
        Logger::new(self.clone(), options)
    }

    pub fn backend(&self) -> &Arc<dyn LogBackend> {
        &self.backend
    }

    pub fn console(&self) -> &Arc<dyn Console> {
        &self.console
    }

    pub fn page(&self) -> &Arc<dyn PageSource> {
        &self.page
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("No process-wide registry has been installed")]
    NotInstalled,
    #[error("A process-wide registry is already installed")]
    AlreadyInstalled,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Install the process-wide registry. Only the first call succeeds.
pub fn install(registry: Registry) -> Result<&'static Registry, RegistryError> {
    GLOBAL
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInstalled)?;
    global()
}

pub fn global() -> Result<&'static Registry, RegistryError> {
    GLOBAL.get().ok_or(RegistryError::NotInstalled)
}

pub fn get_logger(options: LoggerOptions) -> Result<Logger, RegistryError> {
    Ok(global()?.logger(options))
}

pub fn get_transaction() -> Result<Arc<Transaction>, RegistryError> {
    Ok(global()?.current_transaction())
}

pub fn new_transaction() -> Result<Arc<Transaction>, RegistryError> {
    Ok(global()?.create_transaction())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_reports_invalid_page_url() {
        let mut cfg = AppConfig::default();
        cfg.page.url = "not a url".to_string();

        let err = Registry::from_config(&cfg).err().expect("page URL should be rejected");
        assert!(format!("{:#}", err).contains("Invalid page URL: not a url"));
    }

    #[test]
    fn test_from_config_reports_invalid_backend_url() {
        let mut cfg = AppConfig::default();
        cfg.backend.base_url = "::".to_string();

        assert!(Registry::from_config(&cfg).is_err());
    }
}
