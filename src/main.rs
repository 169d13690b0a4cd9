// knobs - interactive demo host for the widget library
//
// The binary plays the external roles the widgets rely on:
// - Host driver: reads terminal keys and delivers one event at a time
// - Focus manager: decides which widget is focused (Tab/Shift+Tab)
// - Rendering substrate: paints each widget's Element tree with ratatui
//
// Architecture:
// - CLI (clap): config subcommands and per-run overrides
// - Config (toml): ~/.config/knobs/config.toml with env overrides
// - Logging (tracing): captured in memory for the log pane, optional file output
// - TUI (ratatui + crossterm): single-threaded draw / read-key loop

mod cli;
mod config;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::{Config, LogRotation, LoggingConfig, VERSION};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --path, --reset, --edit)
    // If a command was handled, exit early
    let cli = Cli::parse();
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Precedence: flags > env > file > defaults
    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    // Logs go to the in-memory buffer so they don't garble the alternate screen.
    // The guard must be kept alive for the duration of the program to ensure
    // file logs flush.
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config.logging, &log_buffer);

    tracing::info!(
        version = VERSION,
        options = config.selector.options.len(),
        "knobs started"
    );

    tui::run_tui(&config, log_buffer)
}

/// Initialize tracing with the TUI buffer layer and optional file output
///
/// Precedence for the filter: RUST_LOG env var > config file > default "info"
fn init_tracing(logging: &LoggingConfig, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("knobs={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = match file_writer(logging) {
        Some((writer, guard)) => (
            // File layer uses JSON format for structured log parsing
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()))
        .with(file_layer)
        .init();

    guard
}

/// Rolling file writer, if file logging is enabled and the directory is usable
fn file_writer(
    logging: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    // Create log directory if it doesn't exist
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        // Fall back to buffer-only logging; the TUI hasn't taken the screen yet
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    // Create rolling file appender based on configured rotation
    let dir = &logging.file_dir;
    let prefix = &logging.file_prefix;
    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
        LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
        LogRotation::Never => tracing_appender::rolling::never(dir, format!("{}.log", prefix)),
    };

    // Wrap in non-blocking writer (writes happen in background thread)
    Some(tracing_appender::non_blocking(file_appender))
}
