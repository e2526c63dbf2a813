//! # Fixed-Length Sequence Encoder

use crate::errors::{DCResult, DatechipperError};
use crate::types::TokenType;
use crate::vocab::CharVocab;

/// Normalize a display string for encoding: lowercase, commas stripped.
///
/// Vocabulary building applies the same normalization, so an encoder and
/// the vocabulary it runs against always agree on the character set.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(',', "")
}

/// Encode a string into exactly `length` vocabulary tokens.
///
/// The input is normalized, truncated to the first `length` characters
/// when longer (the tail is silently discarded), mapped through the
/// vocabulary with out-of-vocabulary characters resolving to the unknown
/// marker, and right-padded with the padding marker when shorter.
///
/// Pure function of its inputs; re-encoding produces a fresh sequence.
///
/// ## Arguments
/// * `text` - The string to encode.
/// * `length` - The fixed target length.
/// * `vocab` - The vocabulary to encode against.
///
/// ## Returns
/// A token sequence of exactly `length` entries, or an error when the
/// vocabulary lacks a marker the input requires.
pub fn encode_chars<T: TokenType>(
    text: &str,
    length: usize,
    vocab: &CharVocab<T>,
) -> DCResult<Vec<T>> {
    let normalized = normalize(text);

    let mut tokens = Vec::with_capacity(length);
    for ch in normalized.chars().take(length) {
        tokens.push(vocab.token_for(ch)?);
    }

    if tokens.len() < length {
        let pad = vocab
            .padding_token()
            .ok_or(DatechipperError::MissingPaddingMarker { target: length })?;
        tokens.resize(length, pad);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Marker;

    type T = u32;

    fn corpus_vocab() -> CharVocab<T> {
        CharVocab::from_chars("12ab".chars())
            .unwrap()
            .with_markers(&[Marker::Unknown, Marker::Padding])
            .unwrap()
    }

    #[test]
    fn test_pad_and_truncate() {
        let vocab = corpus_vocab();

        // '1'=0, '2'=1, 'a'=2, 'b'=3, <unk>=4, <pad>=5
        assert_eq!(encode_chars("ab1", 5, &vocab).unwrap(), vec![2, 3, 0, 5, 5]);

        // Truncation cuts before lookup; unknown characters past the cut
        // are never considered.
        assert_eq!(encode_chars("ab12xy", 4, &vocab).unwrap(), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_normalizes_before_encoding() {
        let vocab = corpus_vocab();
        assert_eq!(
            encode_chars("A,B", 4, &vocab).unwrap(),
            encode_chars("ab", 4, &vocab).unwrap(),
        );
    }

    #[test]
    fn test_unknown_substitution() {
        let vocab = corpus_vocab();
        assert_eq!(encode_chars("axb", 3, &vocab).unwrap(), vec![2, 4, 3]);
    }

    #[test]
    fn test_missing_padding_is_an_error() {
        let bare: CharVocab<T> = CharVocab::from_chars("ab".chars()).unwrap();

        assert!(matches!(
            encode_chars("a", 3, &bare),
            Err(DatechipperError::MissingPaddingMarker { target: 3 })
        ));

        // Exact-length input needs no padding marker.
        assert_eq!(encode_chars("ab", 2, &bare).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_zero_length() {
        let vocab = corpus_vocab();
        assert_eq!(encode_chars("ab", 0, &vocab).unwrap(), Vec::<T>::new());
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn encode_is_exactly_target_length(
                text in "[a-z0-9 /.,-]{0,40}",
                length in 0usize..48,
            ) {
                let vocab = corpus_vocab();
                let tokens = encode_chars(&text, length, &vocab).unwrap();
                prop_assert_eq!(tokens.len(), length);
            }

            #[test]
            fn truncation_matches_prefix_encoding(
                text in "[ab12xyz]{8,24}",
                length in 1usize..8,
            ) {
                let vocab = corpus_vocab();
                let prefix: String = text.chars().take(length).collect();
                prop_assert_eq!(
                    encode_chars(&text, length, &vocab).unwrap(),
                    encode_chars(&prefix, length, &vocab).unwrap(),
                );
            }

            #[test]
            fn encoding_is_pure(
                text in "[ab12xyz]{0,16}",
                length in 0usize..20,
            ) {
                let vocab = corpus_vocab();
                prop_assert_eq!(
                    encode_chars(&text, length, &vocab).unwrap(),
                    encode_chars(&text, length, &vocab).unwrap(),
                );
            }
        }
    }
}
