//! Error types for the SV statistics library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, filtering or summarising VCF records.
#[derive(Error, Debug)]
pub enum SvStatError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// The input ends in `.gz` but is not gzip data.
    #[error("Invalid gzip header: {}", path.display())]
    InvalidGzipHeader { path: PathBuf },

    /// Failed to parse a VCF data line.
    #[error("Row parse error at line {line}: {message}")]
    RowParseError { line: usize, message: String },

    /// A positional INFO token is absent or has no `=value` part.
    #[error("INFO token {index} missing or without value in `{info}`")]
    MissingInfoToken { index: usize, info: String },

    /// The SV length value is not an integer.
    #[error("Invalid SV length: `{value}`")]
    InvalidSvLength { value: String },

    /// No record is left to take SV lengths from.
    #[error("No records left after filtering; SV length range is undefined")]
    EmptyTable,

    /// Failed to parse a filter expression.
    #[error("Filter parse error: {0}")]
    FilterParseError(String),

    /// Type mismatch during evaluation.
    #[error("Type mismatch: cannot compare {left} with {right}")]
    TypeMismatch { left: String, right: String },
}

/// Result type alias for SV statistics operations.
pub type Result<T> = std::result::Result<T, SvStatError>;
