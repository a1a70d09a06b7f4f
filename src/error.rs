use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected construction or configuration input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid needs positive dimensions and at least two cells, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("tick interval must be at least {min_ms} ms, got {got_ms} ms")]
    TickTooShort { got_ms: u64, min_ms: u64 },

    #[error("failed to read settings file {}", path.display())]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed settings file {}", path.display())]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level failure surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}
