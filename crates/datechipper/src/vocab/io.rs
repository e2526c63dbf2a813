//! # Vocabulary Persistence
//!
//! A vocabulary round-trips through a [`VocabTable`]: the characters in
//! token-index order plus the marker list. This is sufficient to
//! reconstruct both the forward and inverse mappings.

use std::io::{Read, Write};

use crate::errors::DCResult;
use crate::types::TokenType;
use crate::vocab::{CharVocab, Marker};

/// Serializable form of a [`CharVocab`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VocabTable {
    /// Characters in token-index order.
    pub chars: Vec<char>,

    /// Markers appended after the characters, in token-index order.
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl<T: TokenType> From<&CharVocab<T>> for VocabTable {
    fn from(vocab: &CharVocab<T>) -> Self {
        Self {
            chars: vocab.chars().to_vec(),
            markers: vocab.markers().to_vec(),
        }
    }
}

impl VocabTable {
    /// Reconstruct the vocabulary this table was taken from.
    pub fn into_vocab<T: TokenType>(self) -> DCResult<CharVocab<T>> {
        CharVocab::from_parts(self.chars, self.markers)
    }
}

/// Write a vocabulary as JSON.
///
/// ## Arguments
/// * `vocab` - The vocabulary to persist.
/// * `writer` - The target writer.
pub fn write_vocab_json<T: TokenType, W: Write>(
    vocab: &CharVocab<T>,
    writer: &mut W,
) -> DCResult<()> {
    serde_json::to_writer(writer, &VocabTable::from(vocab))?;
    Ok(())
}

/// Read a vocabulary from JSON.
///
/// ## Arguments
/// * `reader` - The source reader.
///
/// ## Returns
/// The reconstructed vocabulary.
pub fn read_vocab_json<T: TokenType, R: Read>(reader: R) -> DCResult<CharVocab<T>> {
    let table: VocabTable = serde_json::from_reader(reader)?;
    table.into_vocab()
}
