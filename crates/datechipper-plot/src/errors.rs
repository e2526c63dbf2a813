//! # Error Types

use datechipper::DatechipperError;
use datechipper_data::DatasetError;

/// Errors from attention capture and rendering.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// The model returned an attention row of the wrong width.
    #[error("attention row for step {step} has length {actual}, expected {expected}")]
    AttentionShape {
        /// The output step queried.
        step: usize,
        /// The expected row width.
        expected: usize,
        /// The width the model returned.
        actual: usize,
    },

    /// The model's prediction matrix has the wrong shape.
    #[error("prediction matrix is {actual_rows}x{actual_cols}, expected {expected_rows} rows")]
    PredictionShape {
        /// The expected row count.
        expected_rows: usize,
        /// The row count returned.
        actual_rows: usize,
        /// The column count returned.
        actual_cols: usize,
    },

    /// Error from the core vocabulary/codec layer.
    #[error(transparent)]
    Vocab(#[from] DatechipperError),

    /// Error from batch projection.
    #[error(transparent)]
    Data(#[from] DatasetError),

    /// Error reported by the model's forward pass.
    #[error("model: {0}")]
    Model(#[from] anyhow::Error),

    /// Error from the rendering backend.
    #[error("render: {0}")]
    Render(String),
}

/// Result type for plot operations.
pub type PlotResult<T> = core::result::Result<T, PlotError>;
