// src/internal/logger/logger.rs

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::internal::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Mirrored console messages pass at every level, whatever the diagnostics level is
const MIRROR_DIRECTIVE: &str = "web_console=trace";

/// Initialize the diagnostics subscriber with the given configuration
pub fn init_logger(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = build_filter(cfg, std::env::var(EnvFilter::DEFAULT_ENV).ok());

    let mut layers: Vec<BoxedLayer> = Vec::new();

    if !cfg.disable_console {
        layers.push(fmt_layer(cfg, io::stderr, cfg.color));
    }

    if let Some(output_path) = &cfg.output_path {
        let log_file = create_log_file(output_path, cfg.append_to_file)?;
        layers.push(fmt_layer(cfg, SharedFileWriter::new(log_file), false));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(())
}

/// `env` takes precedence over the configured level
fn build_filter(cfg: &LoggingConfig, env: Option<String>) -> EnvFilter {
    let base = env
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| cfg.level.clone());
    EnvFilter::new(format!("{},{}", base, MIRROR_DIRECTIVE))
}

fn fmt_layer<W>(cfg: &LoggingConfig, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    match cfg.format.as_str() {
        "json" => layer.json().boxed(),
        "pretty" => layer.pretty().boxed(),
        _ => layer.compact().boxed(),
    }
}

/// Create or open log file based on configuration
fn create_log_file(path: &str, append: bool) -> anyhow::Result<fs::File> {
    let path = Path::new(path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(append)
        .write(true)
        .truncate(!append)
        .open(path)?;

    Ok(file)
}

/// File writer shared between formatter instances
#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<fs::File>>,
}

impl SharedFileWriter {
    fn new(file: fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, fs::File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))
    }
}

impl io::Write for SharedFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::internal::console::{Console, TracingConsole};
    use crate::internal::facade::ConsoleChannel;

    fn capture_with_filter(env: Option<&str>, emit: impl FnOnce()) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.log");
        let cfg = LoggingConfig::default();
        let writer = SharedFileWriter::new(create_log_file(path.to_str().unwrap(), false).unwrap());

        let subscriber = tracing_subscriber::registry()
            .with(fmt_layer(&cfg, writer, false))
            .with(build_filter(&cfg, env.map(str::to_string)));
        tracing::subscriber::with_default(subscriber, emit);

        fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_default_level_keeps_every_mirrored_channel() {
        let out = capture_with_filter(None, || {
            let console = TracingConsole;
            console.write(ConsoleChannel::Info, "mirrored-info");
            console.write(ConsoleChannel::Debug, "mirrored-debug");
            tracing::debug!("diagnostic-debug");
        });

        assert!(out.contains("mirrored-info"), "output: {}", out);
        assert!(out.contains("mirrored-debug"), "output: {}", out);
        assert!(!out.contains("diagnostic-debug"), "output: {}", out);
    }

    #[test]
    fn test_env_directives_keep_mirrored_debug() {
        let out = capture_with_filter(Some("error"), || {
            TracingConsole.write(ConsoleChannel::Debug, "mirrored-debug");
            tracing::warn!("diagnostic-warn");
        });

        assert!(out.contains("mirrored-debug"), "output: {}", out);
        assert!(!out.contains("diagnostic-warn"), "output: {}", out);
    }

    #[test]
    fn test_create_log_file_truncates_unless_appending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("client.log");
        let path_str = path.to_str().unwrap();

        let mut file = create_log_file(path_str, false).unwrap();
        file.write_all(b"first\n").unwrap();
        drop(file);

        let mut file = create_log_file(path_str, true).unwrap();
        file.write_all(b"second\n").unwrap();
        drop(file);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");

        drop(create_log_file(path_str, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
