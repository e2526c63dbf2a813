//! # Corpus Vocabulary Builder

use std::collections::BTreeSet;

use crate::encoding::normalize;
use crate::errors::DCResult;
use crate::types::TokenType;
use crate::vocab::{CharVocab, InverseVocab, Marker};

/// The vocabularies derived from one (human, machine) corpus.
///
/// These must be kept alongside any encoded dataset or trained model
/// derived from them; indices are meaningless without the vocabulary
/// that produced them. See [`crate::vocab::io`] for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetVocabs<T: TokenType> {
    /// Human-side vocabulary: corpus characters plus unknown and padding
    /// markers, in that order.
    pub human: CharVocab<T>,

    /// Machine-side vocabulary: corpus characters only, no markers.
    pub machine: CharVocab<T>,

    /// Inverse of the machine vocabulary, for decoding model output.
    pub inv_machine: InverseVocab<T>,
}

/// Accumulates the distinct characters of a (human, machine) pair corpus.
///
/// Character sets are kept ordered, so the built vocabularies are
/// independent of the order pairs were scanned in.
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    human_chars: BTreeSet<char>,
    machine_chars: BTreeSet<char>,
}

impl VocabularyBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one example pair.
    ///
    /// The human side is normalized (lowercased, commas stripped) before
    /// scanning, so the built vocabulary covers exactly what the encoder
    /// will see.
    ///
    /// ## Arguments
    /// * `human` - The human-readable string.
    /// * `machine` - The machine-readable string.
    pub fn scan_pair(
        &mut self,
        human: &str,
        machine: &str,
    ) {
        self.human_chars.extend(normalize(human).chars());
        self.machine_chars.extend(machine.chars());
    }

    /// Scan a collection of example pairs.
    pub fn scan_pairs<I, H, M>(
        &mut self,
        pairs: I,
    ) where
        I: IntoIterator<Item = (H, M)>,
        H: AsRef<str>,
        M: AsRef<str>,
    {
        for (human, machine) in pairs {
            self.scan_pair(human.as_ref(), machine.as_ref());
        }
    }

    /// Number of distinct human-side characters scanned so far.
    pub fn human_char_count(&self) -> usize {
        self.human_chars.len()
    }

    /// Number of distinct machine-side characters scanned so far.
    pub fn machine_char_count(&self) -> usize {
        self.machine_chars.len()
    }

    /// Build the vocabularies for the scanned corpus.
    ///
    /// ## Returns
    /// The human vocabulary (characters + `<unk>` + `<pad>`), the machine
    /// vocabulary (characters only), and the machine inverse; or a size
    /// overflow error if a vocabulary does not fit `T`.
    pub fn build<T: TokenType>(&self) -> DCResult<DatasetVocabs<T>> {
        let human = CharVocab::from_chars(self.human_chars.iter().copied())?
            .with_markers(&[Marker::Unknown, Marker::Padding])?;
        let machine = CharVocab::from_chars(self.machine_chars.iter().copied())?;
        let inv_machine = machine.inverse();

        log::debug!(
            "built vocabularies: human={} ({} chars + 2 markers), machine={}",
            human.len(),
            human.char_count(),
            machine.len(),
        );

        Ok(DatasetVocabs {
            human,
            machine,
            inv_machine,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type T = u32;

    #[test]
    fn test_human_markers_machine_bare() {
        let mut builder = VocabularyBuilder::new();
        builder.scan_pairs([("9 may 1998", "1998-05-09"), ("10 jun 2001", "2001-06-10")]);

        let vocabs: DatasetVocabs<T> = builder.build().unwrap();

        assert_eq!(vocabs.human.len(), vocabs.human.char_count() + 2);
        assert_eq!(vocabs.human.markers(), &[Marker::Unknown, Marker::Padding]);

        assert_eq!(vocabs.machine.len(), vocabs.machine.char_count());
        assert!(vocabs.machine.markers().is_empty());
        assert_eq!(vocabs.inv_machine.len(), vocabs.machine.len());
    }

    #[test]
    fn test_deterministic_under_reordering() {
        let pairs = [("3 march 1987", "1987-03-03"), ("friday 1 may 2020", "2020-05-01")];

        let mut forward = VocabularyBuilder::new();
        forward.scan_pairs(pairs);

        let mut reversed = VocabularyBuilder::new();
        reversed.scan_pairs(pairs.iter().rev().copied());

        let a: DatasetVocabs<T> = forward.build().unwrap();
        let b: DatasetVocabs<T> = reversed.build().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_human_side_is_normalized() {
        let mut builder = VocabularyBuilder::new();
        builder.scan_pair("May 9, 1998", "1998-05-09");

        let vocabs: DatasetVocabs<T> = builder.build().unwrap();
        assert_eq!(vocabs.human.lookup(','), None);
        assert_eq!(vocabs.human.lookup('M'), None);
        assert!(vocabs.human.lookup('m').is_some());
    }
}
