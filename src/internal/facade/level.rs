// src/internal/facade/level.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity tag carried by every log entry, most to least important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Fine,
    Finer,
    Finest,
}

/// Developer console write channel used when the backend asks for mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleChannel {
    Error,
    Warn,
    Debug,
    Info,
}

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Fine,
        LogLevel::Finer,
        LogLevel::Finest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Fine => "FINE",
            LogLevel::Finer => "FINER",
            LogLevel::Finest => "FINEST",
        }
    }

    /// Console channel a mirrored message for this level is written to.
    pub fn console_channel(&self) -> ConsoleChannel {
        match self {
            LogLevel::Error => ConsoleChannel::Error,
            LogLevel::Warn => ConsoleChannel::Warn,
            LogLevel::Debug => ConsoleChannel::Debug,
            LogLevel::Info | LogLevel::Fine | LogLevel::Finer | LogLevel::Finest => {
                ConsoleChannel::Info
            }
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_serialize_as_upper_case_tags() {
        let tags: Vec<String> = LogLevel::ALL
            .iter()
            .map(|level| serde_json::to_string(level).unwrap())
            .collect();

        assert_eq!(
            tags,
            vec![
                "\"ERROR\"",
                "\"WARN\"",
                "\"INFO\"",
                "\"DEBUG\"",
                "\"FINE\"",
                "\"FINER\"",
                "\"FINEST\""
            ]
        );
    }

    #[test]
    fn test_console_channel_mapping_is_total() {
        assert_eq!(LogLevel::Error.console_channel(), ConsoleChannel::Error);
        assert_eq!(LogLevel::Warn.console_channel(), ConsoleChannel::Warn);
        assert_eq!(LogLevel::Debug.console_channel(), ConsoleChannel::Debug);
        for level in [LogLevel::Info, LogLevel::Fine, LogLevel::Finer, LogLevel::Finest] {
            assert_eq!(level.console_channel(), ConsoleChannel::Info);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("finer".parse::<LogLevel>().unwrap(), LogLevel::Finer);
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
