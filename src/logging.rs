//! Logging setup for hosts that have no subscriber of their own
//!
//! The library itself only emits `tracing` events.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Write to this file instead of stderr
    pub file: Option<PathBuf>,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

/// Installs a global subscriber.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for as long as logging is needed.
pub fn init(options: &LogOptions) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (writer, guard) = match &options.file {
        Some(path) => {
            let (non_blocking, guard) = file_writer(path)?;
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let ansi = options.file.is_none();
    let registry = tracing_subscriber::registry().with(filter);

    if options.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .try_init()?;
    }

    Ok(guard)
}

/// Non-rolling, non-blocking writer appending to `path`
fn file_writer(path: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid log file path: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
