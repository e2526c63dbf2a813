//! # Vocabulary
//!
//! Character vocabularies for (human, machine) date corpora.
//!
//! The human-side vocabulary carries two reserved markers appended after
//! the character range, `<unk>` then `<pad>`; the machine-side vocabulary
//! is characters only. See [`VocabularyBuilder`] for construction from a
//! corpus, and [`io`] for persistence.

pub mod char_vocab;
pub mod inverse_vocab;
pub mod io;
pub mod symbols;
pub mod vocab_builder;

#[doc(inline)]
pub use char_vocab::CharVocab;
#[doc(inline)]
pub use inverse_vocab::InverseVocab;
#[doc(inline)]
pub use symbols::{Marker, Symbol};
#[doc(inline)]
pub use vocab_builder::{DatasetVocabs, VocabularyBuilder};
