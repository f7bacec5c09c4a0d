//! Subscriber setup for the CLI.
//!
//! The filter comes from `-v` or `NOTION_SEARCH_LOG`. Events go to stderr,
//! or are appended to `NOTION_SEARCH_LOG_FILE`, as compact text or JSON lines.

use crate::constants;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Case-insensitive `text` or `json`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Maps `-v` counts to a filter directive, deferring to `NOTION_SEARCH_LOG`
/// when no flag is given.
#[must_use]
pub fn log_level(verbosity: u8, env_level: Option<String>) -> String {
    match verbosity {
        0 => env_level.unwrap_or_else(|| "warn".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

// Tracing is not initialized yet when these run, so problems go to eprintln!.

fn log_format_from_env() -> LogFormat {
    let Ok(value) = std::env::var(constants::ENV_LOG_FORMAT) else {
        return LogFormat::Text;
    };
    LogFormat::parse(&value).unwrap_or_else(|| {
        eprintln!(
            "Warning: Unrecognized {} '{value}'. Valid values: 'json', 'text'. Using 'text'.",
            constants::ENV_LOG_FORMAT
        );
        LogFormat::Text
    })
}

fn log_file_from_env() -> Option<File> {
    let path = std::env::var(constants::ENV_LOG_FILE).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| eprintln!("Warning: Could not open log file '{path}': {e}. Using stderr."))
        .ok()
}

/// Installs the global subscriber. Call once, before any request is made.
pub fn init_tracing(verbosity: u8) {
    let directive = log_level(verbosity, std::env::var(constants::ENV_LOG).ok());
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_file = log_file_from_env();
    let ansi = log_file.is_none();
    let writer = log_file.map_or_else(
        || BoxMakeWriter::new(std::io::stderr),
        |file| BoxMakeWriter::new(Mutex::new(file)),
    );

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match log_format_from_env() {
        LogFormat::Json => fmt::layer()
            .json()
            .with_span_list(false)
            .with_target(true)
            .with_line_number(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Text => fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .init();
}
