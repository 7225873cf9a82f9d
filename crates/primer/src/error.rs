//! Error types for the walkthrough components.

use thiserror::Error;

/// Result type for primer operations.
pub type Result<T> = std::result::Result<T, PrimerError>;

#[derive(Debug, Error)]
pub enum PrimerError {
    /// Writing a line to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// A byte range does not fit inside the text it was taken from.
    #[error("byte range {start}..{end} is out of bounds for text of length {len}")]
    SliceOutOfRange { start: usize, end: usize, len: usize },

    /// A section name did not match any component.
    #[error("unknown section '{0}' (expected one of: aggregate, sequence, mapping, scan, prefix)")]
    UnknownSection(String),
}
