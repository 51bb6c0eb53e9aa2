use std::fmt;
use thiserror::Error;

/// Step of a container restart that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartStage {
    Stop,
    Start,
    Health,
}

impl fmt::Display for RestartStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestartStage::Stop => f.write_str("stop"),
            RestartStage::Start => f.write_str("start"),
            RestartStage::Health => f.write_str("health check"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] embench_core::Error),

    #[error("Query failed{}: {message}", .code.as_deref().map(|c| format!(" ({})", c)).unwrap_or_default())]
    Query {
        code: Option<String>,
        message: String,
    },

    #[error("Isolation step failed: {0}")]
    Isolation(String),

    #[error("Container restart failed at {stage}: {message}")]
    Restart { stage: RestartStage, message: String },

    #[error("Metrics mismatch: {0}")]
    MetricsMismatch(String),

    #[error("Remote command failed: {0}")]
    Remote(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl Error {
    pub fn query(message: impl Into<String>) -> Self {
        Error::Query {
            code: None,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
