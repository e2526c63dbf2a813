//! # Fixed-Length Sequence Codec
//!
//! Converts normalized strings into fixed-length token sequences and
//! back. Encoding truncates or right-pads to the target length; decoding
//! resolves each index through an inverse vocabulary.

pub mod decoder;
pub mod encoder;

#[doc(inline)]
pub use decoder::{decode_tokens, symbols_to_string};
#[doc(inline)]
pub use encoder::{encode_chars, normalize};
