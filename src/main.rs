// Manifesto - The Chennai Compute Company, in your terminal
//
// A single-page manifesto rendered with ratatui: a hero, a scroll-driven
// reveal of the manifesto text, and a footer with an email signup form.
//
// Architecture:
// - Reveal: scroll progress -> visible paragraphs -> one-time completion latch
// - Signup: email validation and webhook delivery (reqwest)
// - Theme: two-valued toggle resolved into a palette
// - TUI (ratatui): page composition and the input/frame event loop
// - Config: TOML file + env overrides; logging via tracing

mod cli;
mod config;
mod content;
mod logging;
mod reveal;
mod signup;
mod startup;
mod theme;
mod tui;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use signup::{SignupSubmitter, WebhookNotifier};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle offline commands first (print, config --show/--reset/--path)
    if let Some(command) = &cli.command {
        if cli::handle_offline(command) {
            return Ok(());
        }
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();
    let interactive = cli.command.is_none();

    // Create log buffer for the page's log strip
    let log_buffer = LogBuffer::new();

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = init_tracing(&config, interactive, &log_buffer);

    let notifier =
        WebhookNotifier::from_config(&config.signup).context("Failed to create signup notifier")?;
    let submitter = Arc::new(SignupSubmitter::new(
        notifier,
        config.signup.source.clone(),
        config.signup.recipient.clone(),
    ));

    match cli.command {
        Some(Commands::Signup { email }) => {
            startup::print_startup(&config, submitter.notifier());
            cli::handle_signup(&submitter, &email).await
        }
        _ => {
            startup::log_startup(&config, submitter.notifier());
            tui::run_tui(config, log_buffer, submitter).await
        }
    }
}

/// Initialize tracing with conditional output
///
/// - Page mode: capture logs to the buffer (prevents garbling the display)
/// - Command mode: write logs to stderr (stdout carries command output)
/// - File logging: optionally write JSON to rotating log files (in addition to above)
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, interactive: bool, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("manifesto={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = interactive.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer = (!interactive).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => {
            // File layer uses JSON format for structured log parsing
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Non-blocking rolling file writer, when file logging is enabled
fn file_writer(
    config: &Config,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let logging = &config.logging;
    if !logging.file_enabled {
        return None;
    }

    // Create log directory if it doesn't exist
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    // Wrap in non-blocking writer (writes happen in background thread)
    Some(tracing_appender::non_blocking(file_appender))
}
