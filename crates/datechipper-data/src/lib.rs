//! # `datechipper-data` Synthetic Date Corpus Generation
//!
//! Generates (human, machine) calendar date string pairs from a seeded
//! random source, loads them into datasets with their vocabularies, and
//! projects encoded batches into one-hot tensors.
//!
//! See:
//! * [`formats`] for the display format table.
//! * [`sampler`] to draw individual pairs.
//! * [`loader`] to collect a dataset and build its vocabularies.
//! * [`preprocess`] for model-ready id and one-hot batches.
#![warn(missing_docs, unused)]

pub mod errors;
pub mod formats;
pub mod loader;
pub mod preprocess;
pub mod sampler;

#[doc(inline)]
pub use errors::{DataResult, DatasetError};
#[doc(inline)]
pub use formats::{DisplayFormat, FORMAT_CHOICES};
#[doc(inline)]
pub use loader::{DatasetConfig, LoadedDataset, load_dataset};
#[doc(inline)]
pub use preprocess::{PreparedDataset, one_hot, preprocess};
#[doc(inline)]
pub use sampler::{DatePair, DateSampler, DateSamplerOptions, render_pair};
