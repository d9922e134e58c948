//! Logging Module
//!
//! Sets up `tracing` with:
//! - A JSON file layer (daily rolling) in the app data directory
//! - A bridge so `log` macros land in the same subscriber
//! - A miette hook for diagnostic error reports

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

/// Log file prefix; tracing-appender appends `.YYYY-MM-DD`.
pub const LOG_FILE_NAME: &str = "lore-engine.log";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Directory holding the rolling log files.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("lore-engine").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn ensure_log_dir() -> PathBuf {
    let log_dir = log_dir();
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }
    log_dir
}

/// Initialize file-only logging for TUI mode.
///
/// Nothing is written to stdout, which belongs to ratatui while the terminal
/// is in raw/alternate-screen mode. Returns a `WorkerGuard` which must be
/// kept alive so buffered logs are flushed on shutdown.
pub fn init_tui() -> WorkerGuard {
    let log_dir = ensure_log_dir();

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // File Layer: JSON format for easy parsing
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter());

    let subscriber = tracing_subscriber::registry().with(file_layer);

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }

    // Redirect standard `log` macros to `tracing`
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    init_miette();

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_NAME)
    );

    guard
}

/// Configure miette's report handler for `main`'s error output.
fn init_miette() {
    let interactive = io::stderr().is_terminal();
    let result = miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .color(interactive)
                .build(),
        )
    }));
    if let Err(e) = result {
        log::debug!("miette hook already installed: {e}");
    }
}
