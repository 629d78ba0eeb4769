//! Error type for the effectful edges (terminal, log file).
//!
//! The sorters themselves never fail; only the I/O around them can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Raw mode, alternate screen or backend could not be set up.
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),

    /// Drawing, polling or restoring failed while the visualizer ran.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    /// The log file could not be opened.
    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
