// src/internal/console/mod.rs

use std::error::Error;
use std::sync::Arc;

use crate::internal::config::ConsoleKind;
use crate::internal::facade::ConsoleChannel;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

/// Local developer console the backend can ask messages to be mirrored to
pub trait Console: Send + Sync {
    /// Write a message on one of the severity channels
    fn write(&self, channel: ConsoleChannel, message: &str);

    /// Report a diagnostic error that was absorbed rather than returned
    fn report_error(&self, error: &dyn Error);
}

/// Routes console channels to `tracing` events under the `web_console` target
#[derive(Debug, Clone, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn write(&self, channel: ConsoleChannel, message: &str) {
        match channel {
            ConsoleChannel::Error => tracing::error!(target: "web_console", "{}", message),
            ConsoleChannel::Warn => tracing::warn!(target: "web_console", "{}", message),
            ConsoleChannel::Debug => tracing::debug!(target: "web_console", "{}", message),
            ConsoleChannel::Info => tracing::info!(target: "web_console", "{}", message),
        }
    }

    fn report_error(&self, error: &dyn Error) {
        tracing::error!(target: "web_console", error = %error, "console error");
    }
}

/// Writes straight to the process standard streams
#[derive(Debug, Clone, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write(&self, channel: ConsoleChannel, message: &str) {
        match channel {
            ConsoleChannel::Error | ConsoleChannel::Warn => eprintln!("{}", message),
            ConsoleChannel::Debug | ConsoleChannel::Info => println!("{}", message),
        }
    }

    fn report_error(&self, error: &dyn Error) {
        eprintln!("{}", error);
    }
}

/// Build the console selected in configuration
pub fn create_console(kind: &ConsoleKind) -> Arc<dyn Console> {
    match kind {
        ConsoleKind::Tracing => Arc::new(TracingConsole),
        ConsoleKind::Std => Arc::new(StdConsole),
    }
}
