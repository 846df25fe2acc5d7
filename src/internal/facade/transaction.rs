// src/internal/facade/transaction.rs

use std::fmt;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::internal::backend::LogBackend;
use crate::internal::console::Console;

/// Prefix of identifiers synthesized when the issuance service is unavailable
pub const FALLBACK_PREFIX: &str = "lightning-";

/// Where a transaction identifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionId {
    pub value: String,
    pub source: IdSource,
}

impl TransactionId {
    fn fallback() -> Self {
        Self {
            value: format!(
                "{}{}",
                FALLBACK_PREFIX,
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            source: IdSource::Fallback,
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// One logical user transaction correlating the entries logged under it.
///
/// The identifier is issued lazily on first use and cached for the lifetime
/// of the instance. Concurrent first callers share a single issuance call.
pub struct Transaction {
    issuer: Arc<dyn LogBackend>,
    console: Arc<dyn Console>,
    id: OnceCell<TransactionId>,
}

impl Transaction {
    pub fn new(issuer: Arc<dyn LogBackend>, console: Arc<dyn Console>) -> Self {
        Self {
            issuer,
            console,
            id: OnceCell::new(),
        }
    }

    /// Resolve the identifier, issuing it on first call. Never fails.
    pub async fn resolve(&self) -> &TransactionId {
        self.id.get_or_init(|| self.issue()).await
    }

    pub async fn resolve_identifier(&self) -> String {
        self.resolve().await.value.clone()
    }

    /// The identifier if it has already been resolved
    pub fn cached(&self) -> Option<&TransactionId> {
        self.id.get()
    }

    async fn issue(&self) -> TransactionId {
        match self.issuer.create_transaction_id().await {
            Ok(value) => {
                debug!("Issued transaction id {}", value);
                TransactionId {
                    value,
                    source: IdSource::Remote,
                }
            }
            Err(e) => {
                self.console.report_error(&e);
                let id = TransactionId::fallback();
                warn!("Transaction id issuance failed ({}), using {}", e, id);
                id
            }
        }
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction").field("id", &self.id.get()).finish()
    }
}
