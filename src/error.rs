//! Error taxonomy for the collocation pipeline
//!
//! Every error is fatal at the point it is raised. Wrong argument counts never
//! reach this type: clap rejects them before the pipeline starts.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollocateError {
    #[error("Cannot read corpus at {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed row at line {line}: {reason}")]
    Format { line: u64, reason: String },

    #[error("Significance level must be in (0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("Corpus size must be positive, got {0}")]
    InvalidCorpusSize(u64),

    #[error("Target word '{0}' cannot name an output directory")]
    InvalidTargetWord(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Distribution error: {0}")]
    Distribution(String),
}

pub type CollocateResult<T> = Result<T, CollocateError>;
