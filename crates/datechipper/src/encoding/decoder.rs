//! # Sequence Decoder

use crate::errors::DCResult;
use crate::types::TokenType;
use crate::vocab::{InverseVocab, Symbol};

/// Decode a token sequence back into symbols, one per index, in order.
///
/// ## Arguments
/// * `tokens` - The token sequence to decode.
/// * `inverse` - The inverse vocabulary to resolve against.
///
/// ## Returns
/// The decoded symbols, or `IndexOutOfVocab` if any index is outside the
/// inverse domain. The failure indicates mismatched vocabulary state and
/// never occurs for sequences encoded against the matching vocabulary.
pub fn decode_tokens<T: TokenType>(
    tokens: &[T],
    inverse: &InverseVocab<T>,
) -> DCResult<Vec<Symbol>> {
    tokens.iter().map(|&t| inverse.lookup(t)).collect()
}

/// Render decoded symbols as a display string.
///
/// Characters render as themselves; markers render as `<unk>` / `<pad>`.
pub fn symbols_to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_chars;
    use crate::errors::DatechipperError;
    use crate::vocab::{CharVocab, Marker};

    type T = u32;

    #[test]
    fn test_decode_recovers_normalized_text() {
        let vocab: CharVocab<T> = CharVocab::from_chars("12ab".chars())
            .unwrap()
            .with_markers(&[Marker::Unknown, Marker::Padding])
            .unwrap();
        let inverse = vocab.inverse();

        let tokens = encode_chars("ab1", 5, &vocab).unwrap();
        let symbols = decode_tokens(&tokens, &inverse).unwrap();

        assert_eq!(
            symbols,
            vec![
                Symbol::Char('a'),
                Symbol::Char('b'),
                Symbol::Char('1'),
                Symbol::Marker(Marker::Padding),
                Symbol::Marker(Marker::Padding),
            ]
        );
        assert_eq!(symbols_to_string(&symbols), "ab1<pad><pad>");
    }

    #[test]
    fn test_mismatched_state_is_fatal() {
        let vocab: CharVocab<T> = CharVocab::from_chars("ab".chars()).unwrap();
        let inverse = vocab.inverse();

        assert!(matches!(
            decode_tokens(&[0, 9], &inverse),
            Err(DatechipperError::IndexOutOfVocab { index: 9 })
        ));
    }
}
