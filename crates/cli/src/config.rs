//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};
use mochila_observability::LogFormat;

/// Environment variable consulted when `--log-format` is not given.
pub const LOG_FORMAT_ENV: &str = "MOCHILA_LOG_FORMAT";

/// Mochila - a ten-slot backpack inventory in your terminal
#[derive(Debug, Parser)]
#[command(name = "mochila")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Write list and search results as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Log encoding on stderr (falls back to $MOCHILA_LOG_FORMAT, then text)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormatArg>,

    /// Skip the welcome banner
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    /// Resolve the log format: flag, then environment, then the default.
    pub fn log_format(&self) -> LogFormat {
        if let Some(arg) = self.log_format {
            return arg.into();
        }
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(raw) => parse_log_format(&raw).unwrap_or_else(|| {
                eprintln!("{LOG_FORMAT_ENV}='{raw}' not recognized; using text logs");
                LogFormat::default()
            }),
            Err(_) => LogFormat::default(),
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            output: if self.json { OutputMode::Json } else { OutputMode::Table },
            show_banner: !self.quiet,
        }
    }
}

fn parse_log_format(raw: &str) -> Option<LogFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "text" => Some(LogFormat::Text),
        "json" => Some(LogFormat::Json),
        _ => None,
    }
}

/// How list and search results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Table,
    Json,
}

/// Settings for one menu session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub output: OutputMode,
    pub show_banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::Table,
            show_banner: true,
        }
    }
}
