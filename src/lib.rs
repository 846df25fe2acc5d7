pub mod cli;
pub mod internal;

// Re-export commonly used types
pub use internal::config::AppConfig;
pub use internal::facade::{
    get_logger, get_transaction, new_transaction, LogEntry, LogLevel, Logger, LoggerOptions,
    Registry, Transaction,
};
