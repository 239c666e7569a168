use std::path::PathBuf;
use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum ClockError {
    #[error("failed to read parameter file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid parameter file: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience type for `Result<T, ClockError>`.
pub type ClockResult<T> = Result<T, ClockError>;
