use std::sync::Arc;

use anyhow::Context;
use clap::{Arg, Command};

use crate::internal::config::{AppConfig, ConsoleKind};
use crate::internal::facade::{ElementTag, LogLevel, LoggerOptions};

/// One message to dispatch, as given on the command line
pub struct Invocation {
    pub level: LogLevel,
    pub message: String,
    pub options: LoggerOptions,
}

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let version: &'static str = Box::leak(
        crate::internal::config::get_version_info().into_boxed_str()
    );

    Command::new("lightning-logger")
        .version(version)
        .about("Send a transaction-correlated log entry to the remote log backend")
        .arg(
            Arg::new("message")
                .required(true)
                .help("Message text to log")
        )
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_parser(["error", "warn", "info", "debug", "fine", "finer", "finest"])
                .default_value("info")
                .help("Severity level of the entry")
        )
        .arg(
            Arg::new("name")
                .long("name")
                .help("Logical logger name")
        )
        .arg(
            Arg::new("namespace")
                .long("namespace")
                .help("Namespace the entry belongs to")
        )
        .arg(
            Arg::new("component")
                .long("component")
                .help("Root element tag of the logging component; overrides --name")
        )
        .arg(
            Arg::new("url")
                .long("url")
                .help("Page URL to capture as context")
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .help("Log backend base URL (e.g., http://localhost:8080)")
        )
        .arg(
            Arg::new("console")
                .long("console")
                .value_parser(["tracing", "std"])
                .help("Where mirrored console messages are written")
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to config file (default: ./lightning-logger.toml, /etc/lightning-logger/config.toml)")
        )
}

pub fn parse_config(matches: &clap::ArgMatches) -> anyhow::Result<(AppConfig, Invocation)> {
    let config_path = matches.get_one::<String>("config").map(|s| s.as_str());
    let mut config = AppConfig::load_from(config_path).context("Failed to load configuration")?;

    if let Some(url) = matches.get_one::<String>("endpoint") {
        config.backend.base_url = url.clone();
    }
    if let Some(url) = matches.get_one::<String>("url") {
        config.page.url = url.clone();
    }
    if let Some(console) = matches.get_one::<String>("console") {
        config.console.kind = match console.as_str() {
            "std" => ConsoleKind::Std,
            _ => ConsoleKind::Tracing,
        };
    }

    let level = matches
        .get_one::<String>("level")
        .map(|s| s.parse::<LogLevel>())
        .transpose()?
        .unwrap_or(LogLevel::Info);

    let message = matches
        .get_one::<String>("message")
        .cloned()
        .unwrap_or_default();

    let mut options = LoggerOptions::new();
    if let Some(name) = matches.get_one::<String>("name") {
        options = options.name(name.clone());
    }
    if let Some(namespace) = matches.get_one::<String>("namespace") {
        options = options.namespace(namespace.clone());
    }
    if let Some(tag) = matches.get_one::<String>("component") {
        options = options.component(Arc::new(ElementTag(tag.clone())));
    }

    Ok((config, Invocation { level, message, options }))
}
