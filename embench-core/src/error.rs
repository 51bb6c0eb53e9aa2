use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing binding for placeholder {{{placeholder}}} in {statement}")]
    MissingBinding {
        placeholder: String,
        statement: String,
    },

    #[error("Invalid dataset path '{path}': {reason}")]
    InvalidDatasetPath { path: String, reason: String },

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Aggregation input error in {}: {reason}", .dir.display())]
    AggregationInput { dir: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
