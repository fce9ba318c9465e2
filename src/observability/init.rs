//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, wiring the `tracing` macros
//! used throughout the plugin to the rotating log file under the plugin data
//! directory.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maximum size of the live log file before rotation, in bytes.
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Number of rotated backups retained.
const LOG_BACKUPS: usize = 3;

/// Initializes the tracing subscriber with rotating file output.
///
/// Sets up a pipeline that filters events by the configured trace level and
/// writes plain-text (non-ANSI) formatted lines to
/// `/host/.cache/zellij/snackbar/snackbar.log`, rotating at 10MB with three
/// backups.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if directory creation fails (observability is optional)
/// - Idempotent: safe to call multiple times, only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFileWriter::new(data_dir.join("snackbar.log"), MAX_LOG_SIZE, LOG_BACKUPS);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
