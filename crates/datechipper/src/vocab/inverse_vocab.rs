//! # Inverse Vocabulary Index

use std::collections::HashMap;

use crate::errors::{DCResult, DatechipperError};
use crate::types::TokenType;
use crate::vocab::{CharVocab, Symbol};

/// Token-to-symbol mapping; the exact inverse of a [`CharVocab`] over its
/// domain.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseVocab<T: TokenType> {
    map: HashMap<T, Symbol>,
}

impl<T: TokenType> InverseVocab<T> {
    /// Build the inverse of a vocabulary.
    pub fn of(vocab: &CharVocab<T>) -> Self {
        let mut map = HashMap::with_capacity(vocab.len());
        for (i, &c) in vocab.chars().iter().enumerate() {
            map.insert(T::from_usize(i).unwrap(), Symbol::Char(c));
        }
        for (i, &marker) in vocab.markers().iter().enumerate() {
            map.insert(
                T::from_usize(vocab.char_count() + i).unwrap(),
                Symbol::Marker(marker),
            );
        }
        Self { map }
    }

    /// Number of indexed tokens.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the inverse is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The symbol for a token, if the token is in the domain.
    pub fn get(
        &self,
        token: T,
    ) -> Option<Symbol> {
        self.map.get(&token).copied()
    }

    /// Resolve a token to its symbol.
    ///
    /// ## Arguments
    /// * `token` - The token to resolve.
    ///
    /// ## Returns
    /// The symbol, or `IndexOutOfVocab` for tokens outside the domain.
    pub fn lookup(
        &self,
        token: T,
    ) -> DCResult<Symbol> {
        self.get(token).ok_or(DatechipperError::IndexOutOfVocab {
            index: token.to_usize().unwrap_or(usize::MAX),
        })
    }
}

impl<T: TokenType> From<&CharVocab<T>> for InverseVocab<T> {
    fn from(vocab: &CharVocab<T>) -> Self {
        Self::of(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Marker;

    type T = u32;

    #[test]
    fn test_exact_inverse() {
        let vocab: CharVocab<T> = CharVocab::from_chars("-0159".chars())
            .unwrap()
            .with_markers(&[Marker::Unknown, Marker::Padding])
            .unwrap();
        let inverse = vocab.inverse();

        assert_eq!(inverse.len(), vocab.len());
        for &c in vocab.chars() {
            let token = vocab.lookup(c).unwrap();
            assert_eq!(inverse.lookup(token).unwrap(), Symbol::Char(c));
        }
        assert_eq!(
            inverse.lookup(vocab.padding_token().unwrap()).unwrap(),
            Symbol::Marker(Marker::Padding)
        );
    }

    #[test]
    fn test_out_of_domain_is_fatal() {
        let vocab: CharVocab<T> = CharVocab::from_chars("ab".chars()).unwrap();
        let inverse = vocab.inverse();

        assert!(matches!(
            inverse.lookup(17),
            Err(DatechipperError::IndexOutOfVocab { index: 17 })
        ));
    }
}
