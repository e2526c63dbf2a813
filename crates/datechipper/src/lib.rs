//! # `datechipper` Date Sequence Toolkit
//!
//! Character-level data preparation for sequence-to-sequence date
//! normalization models: vocabularies over (human, machine) date string
//! corpora, and fixed-length integer sequence codecs.
//!
//! See:
//! * [`vocab`] to build, invert, and persist character vocabularies.
//! * [`encoding`] to encode strings into fixed-length token sequences
//!   and decode them back.
//!
//! Dataset generation lives in the `datechipper-data` crate; attention
//! diagnostics in `datechipper-plot`. This crate has no tensor or
//! plotting dependencies.
#![warn(missing_docs, unused)]

pub mod encoding;
pub mod errors;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use encoding::{decode_tokens, encode_chars, normalize, symbols_to_string};
#[doc(inline)]
pub use errors::{DCResult, DatechipperError};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{CharVocab, DatasetVocabs, InverseVocab, Marker, Symbol, VocabularyBuilder};
