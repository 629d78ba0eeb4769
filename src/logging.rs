//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The interactive visualizer owns the terminal, so it only logs when a
//! log file is given. Headless traces log to stderr by default.
//!
//! `RUST_LOG` overrides the level picked from `-v` flags.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::{AppError, Result};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Discard everything (no subscriber installed).
    Off,
    Stderr,
    File(PathBuf),
}

/// Logging configuration built from CLI flags.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            target: LogTarget::Stderr,
        }
    }
}

impl LogConfig {
    /// Map a `-v` count to a level.
    ///
    /// - 0: warn
    /// - 1: info
    /// - 2: debug
    /// - 3+: trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    /// Pick the target: an explicit file wins, otherwise `fallback`.
    #[must_use]
    pub fn with_target(mut self, log_file: Option<PathBuf>, fallback: LogTarget) -> Self {
        self.target = match log_file {
            Some(path) => LogTarget::File(path),
            None => fallback,
        };
        self
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
/// Returns [`AppError::LogFile`] if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    match &config.target {
        LogTarget::Off => {}
        LogTarget::Stderr => install(config.level, io::stderr, true),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            install(config.level, Mutex::new(file), false);
        }
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sortviz={}", level.as_str().to_lowercase())))
}

fn install<W>(level: Level, writer: W, ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
