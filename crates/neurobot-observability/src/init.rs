// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output always goes to stderr: `cpg-compile -` writes generated
//! source to stdout and the two must not interleave.
//!
//! With the `file-logging` feature a combined plain-text log is also written to
//! a timestamped folder:
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       └── neurobot.log
//! ```

use anyhow::{Context, Result};
#[cfg(feature = "file-logging")]
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;

/// Keeps logging alive; dropping it flushes any file output
#[derive(Debug, Default)]
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Build the filter for `debug_flags` on top of `default_level`
pub fn build_filter(debug_flags: &CrateDebugFlags, default_level: &str) -> Result<EnvFilter> {
    let filter = debug_flags.to_filter_string(default_level);
    EnvFilter::try_new(&filter).with_context(|| format!("Invalid log filter: {}", filter))
}

/// Initialize console logging on stderr
///
/// # Arguments
/// * `debug_flags` - Per-crate debug flags
/// * `default_level` - Level for everything not named in `debug_flags`
pub fn init_logging(debug_flags: &CrateDebugFlags, default_level: &str) -> Result<LoggingGuard> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(build_filter(debug_flags, default_level)?);

    Registry::default()
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(LoggingGuard::default())
}

/// Initialize console logging plus a log file under `log_dir`
///
/// # Arguments
/// * `debug_flags` - Per-crate debug flags
/// * `default_level` - Level for everything not named in `debug_flags`
/// * `log_dir` - Base directory for logs (default: `./logs`)
#[cfg(feature = "file-logging")]
pub fn init_file_logging(
    debug_flags: &CrateDebugFlags,
    default_level: &str,
    log_dir: Option<PathBuf>,
) -> Result<LoggingGuard> {
    let base_log_dir = log_dir.unwrap_or_else(|| PathBuf::from("./logs"));

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let run_folder = base_log_dir.join(format!("run_{}", timestamp));
    std::fs::create_dir_all(&run_folder)
        .with_context(|| format!("Failed to create log directory: {}", run_folder.display()))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(build_filter(debug_flags, default_level)?);

    let file_appender = tracing_appender::rolling::never(&run_folder, "neurobot.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(build_filter(debug_flags, default_level)?);

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;
    tracing::info!(log_dir = %run_folder.display(), "File logging enabled");

    Ok(LoggingGuard {
        _file_guard: Some(guard),
    })
}
