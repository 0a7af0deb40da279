//! Error types for the notification pipeline

use std::io;

use thiserror::Error;

/// Failures raised while classifying or rendering course changes.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("malformed date/time '{date} {time}': {source}")]
    Format {
        date: String,
        time: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("calendar entry '{filename}' is not of the form '<date> <time> <name>'")]
    Parse { filename: String },
    #[error("contract violation: {0}")]
    ContractViolation(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, NotifyError>;
