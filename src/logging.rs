//! Per-run diagnostic logging.
//!
//! When enabled, diagnostics go to a file named by the start timestamp
//! (minute granularity) under the configured directory. The dashboard
//! owns stdout, so nothing is ever logged to the terminal.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::error::DashError;

/// Install the file-backed tracing subscriber if logging is enabled.
///
/// Returns the log-file path, or `None` when logging is disabled; in
/// that case no subscriber is installed and tracing events are no-ops.
pub fn init(config: &Config) -> Result<Option<PathBuf>, DashError> {
    if !config.enable_logging {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.log_dir)?;

    let file_name = format!("{}.log", Local::now().format("%Y-%m-%d_%H-%M"));
    let path = PathBuf::from(&config.log_dir).join(file_name);
    let file = File::create(&path)?;

    let filter =
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        .with(filter)
        .init();

    tracing::info!(path = %path.display(), "diagnostic logging enabled");

    Ok(Some(path))
}
