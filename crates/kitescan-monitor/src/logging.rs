//! Logging setup.
//!
//! Log lines go to the console and to one append-only file per
//! calendar day under the configured directory.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Setup logging with the given level and log directory.
///
/// The returned guard must be held for the lifetime of the process or
/// buffered file output is lost.
pub fn setup_logging(level: &str, dir: &Path) -> WorkerGuard {
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Could not create log directory {}: {}", dir.display(), e);
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = tracing_appender::rolling::daily(dir, "kitescan.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // Console output goes to stderr so the dashboard owns stdout
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    guard
}
