//! Error types for snippet input handling and report output
//!
//! The kernels themselves are total. Everything in here comes from the edges:
//! malformed input text, violated length preconditions, or a failing sink.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SnippetError>;

#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Invalid number {token:?} on line {line}")]
    InvalidNumber { token: String, line: usize },

    #[error("Line {line} declares {expected} values but has {found}")]
    CountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    #[error("Sequence must contain at least one element")]
    EmptySequence,

    #[error("Need at least {needed} values, found {found}")]
    NotEnoughValues { needed: usize, found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
