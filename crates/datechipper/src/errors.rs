//! # Error Types

/// Errors from datechipper operations.
#[derive(Debug, thiserror::Error)]
pub enum DatechipperError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A character outside a vocabulary that defines no unknown marker.
    #[error("character {ch:?} is not in the vocabulary, and no unknown marker is defined")]
    UnmappableChar {
        /// The character that could not be mapped.
        ch: char,
    },

    /// Padding was required, but the vocabulary defines no padding marker.
    #[error("cannot pad to length {target}: vocabulary defines no padding marker")]
    MissingPaddingMarker {
        /// The requested sequence length.
        target: usize,
    },

    /// An index outside the inverse vocabulary domain.
    ///
    /// Indicates mismatched vocabulary/model state; never produced by
    /// decoding sequences built against the matching vocabulary.
    #[error("index {index} is not in the inverse vocabulary")]
    IndexOutOfVocab {
        /// The index that failed to resolve.
        index: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Vocabulary serialization error.
    #[error("vocab serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for datechipper operations.
pub type DCResult<T> = core::result::Result<T, DatechipperError>;
