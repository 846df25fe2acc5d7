// src/internal/facade/mod.rs

pub mod entry;
pub mod level;
pub mod logger;
pub mod payload;
pub mod registry;
pub mod transaction;

pub use entry::{LogEntry, LogError};
pub use level::{ConsoleChannel, LogLevel};
pub use logger::{ElementTag, Logger, LoggerOptions, NameProvider};
pub use payload::{LogPayload, FACADE_VERSION};
pub use registry::{get_logger, get_transaction, new_transaction, Registry, RegistryError};
pub use transaction::{IdSource, Transaction, TransactionId, FALLBACK_PREFIX};
