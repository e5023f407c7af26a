use std::path::Path;

use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Routes all diagnostics to an append-only log file, one line per event.
/// The returned guard must live for the whole run so buffered lines are
/// flushed on exit.
pub fn init(log_path: &Path) -> Result<WorkerGuard> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("Log path has no file name: {}", log_path.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
