//! # Character Vocabulary Index

use std::collections::HashMap;

use crate::errors::{DCResult, DatechipperError};
use crate::types::TokenType;
use crate::vocab::{InverseVocab, Marker};

/// Character-to-token vocabulary.
///
/// Tokens are contiguous from 0: sorted distinct characters first, then
/// any reserved markers, in the order they were appended. Immutable once
/// built; re-building from the same character set always yields the same
/// index assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct CharVocab<T: TokenType> {
    /// Characters in token-index order; sorted ascending, deduplicated.
    chars: Vec<char>,

    /// Markers appended after the character range.
    markers: Vec<Marker>,

    /// Lookup map from character to token.
    index: HashMap<char, T>,
}

impl<T: TokenType> CharVocab<T> {
    /// Build a vocabulary from a character collection.
    ///
    /// The characters are sorted and deduplicated; token assignment is
    /// independent of the input order.
    ///
    /// ## Arguments
    /// * `chars` - The characters to index.
    ///
    /// ## Returns
    /// A new `CharVocab` with no markers, or a size overflow error.
    pub fn from_chars<I>(chars: I) -> DCResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut chars: Vec<char> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();

        Self::from_parts(chars, Vec::new())
    }

    /// Append reserved markers after the character range.
    ///
    /// ## Arguments
    /// * `markers` - The markers to append, in index order.
    ///
    /// ## Returns
    /// The extended `CharVocab`, or a size overflow error.
    pub fn with_markers(
        self,
        markers: &[Marker],
    ) -> DCResult<Self> {
        let mut all = self.markers;
        all.extend_from_slice(markers);
        Self::from_parts(self.chars, all)
    }

    /// Build from an already index-ordered character table.
    ///
    /// Used when reconstructing a persisted vocabulary; the character
    /// order is trusted as the token assignment.
    pub fn from_parts(
        chars: Vec<char>,
        markers: Vec<Marker>,
    ) -> DCResult<Self> {
        let size = chars.len() + markers.len();
        if size > 0 && T::from_usize(size - 1).is_none() {
            return Err(DatechipperError::VocabSizeOverflow { size });
        }

        let index = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, T::from_usize(i).unwrap()))
            .collect();

        Ok(Self {
            chars,
            markers,
            index,
        })
    }

    /// Total number of tokens, characters plus markers.
    pub fn len(&self) -> usize {
        self.chars.len() + self.markers.len()
    }

    /// Returns true if the vocabulary has no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of character tokens, excluding markers.
    pub fn char_count(&self) -> usize {
        self.chars.len()
    }

    /// Characters in token-index order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Markers in token-index order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The token for a character, if present.
    pub fn lookup(
        &self,
        ch: char,
    ) -> Option<T> {
        self.index.get(&ch).copied()
    }

    /// The token for a marker, if the vocabulary defines it.
    pub fn marker_token(
        &self,
        marker: Marker,
    ) -> Option<T> {
        self.markers
            .iter()
            .position(|&m| m == marker)
            .map(|i| T::from_usize(self.chars.len() + i).unwrap())
    }

    /// The unknown-marker token, if defined.
    pub fn unknown_token(&self) -> Option<T> {
        self.marker_token(Marker::Unknown)
    }

    /// The padding-marker token, if defined.
    pub fn padding_token(&self) -> Option<T> {
        self.marker_token(Marker::Padding)
    }

    /// Resolve a character to a token, falling back to the unknown marker.
    ///
    /// ## Arguments
    /// * `ch` - The character to resolve.
    ///
    /// ## Returns
    /// The character's token; the unknown token for out-of-vocabulary
    /// characters; or `UnmappableChar` if the character is absent and the
    /// vocabulary defines no unknown marker.
    pub fn token_for(
        &self,
        ch: char,
    ) -> DCResult<T> {
        self.lookup(ch)
            .or_else(|| self.unknown_token())
            .ok_or(DatechipperError::UnmappableChar { ch })
    }

    /// Build the exact inverse mapping over this vocabulary's domain.
    pub fn inverse(&self) -> InverseVocab<T> {
        InverseVocab::of(self)
    }
}
