//! Error type shared by grid construction, lookup, and the text format.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    /// The requested text format identifier is not recognized.
    #[error("requested format `{0}` not implemented")]
    UnsupportedFormat(String),

    /// Row query outside the native x0 span while extension is disabled.
    #[error("requested x0 {value} out of range ({min}, {max})")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("grid has no rows")]
    EmptyGrid,

    #[error("axis {axis} must have at least 1 entry, got {got}")]
    DegenerateAxis { axis: &'static str, got: usize },

    #[error("axis {axis} is not in increasing order")]
    NotMonotonic { axis: &'static str },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
