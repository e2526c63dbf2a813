//! # Error Types

use datechipper::DatechipperError;

/// Errors from dataset generation and batch projection.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The configured sampling year range is empty or unrepresentable.
    #[error("invalid year range: {min_year}..={max_year}")]
    YearRange {
        /// First sampled year.
        min_year: i32,
        /// Last sampled year.
        max_year: i32,
    },

    /// The attempt cap was reached before enough valid pairs were drawn.
    #[error("exhausted {attempts} attempts before collecting {requested} valid pairs")]
    AttemptsExhausted {
        /// The requested pair count.
        requested: usize,
        /// The attempts spent.
        attempts: usize,
    },

    /// A token does not fit the one-hot depth.
    #[error("token {token} out of range for one-hot depth {depth}")]
    OneHotOverflow {
        /// The offending token value.
        token: usize,
        /// The one-hot depth.
        depth: usize,
    },

    /// A batch could not be assembled into the target shape.
    #[error("batch shape: {0}")]
    Shape(String),

    /// Error from the core vocabulary/codec layer.
    #[error(transparent)]
    Vocab(#[from] DatechipperError),
}

/// Result type for dataset operations.
pub type DataResult<T> = core::result::Result<T, DatasetError>;
