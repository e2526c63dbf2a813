//! # Dataset Loader

use datechipper::{DatasetVocabs, TokenType, VocabularyBuilder};

use crate::errors::{DataResult, DatasetError};
use crate::sampler::{DatePair, DateSamplerOptions};

/// Config for [`load_dataset`].
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Number of valid pairs to collect.
    pub count: usize,

    /// Sampler options.
    pub sampler: DateSamplerOptions,

    /// Attempt budget per requested pair; the total cap is
    /// `count * max_attempt_factor`. Bounds generation on a pathological
    /// locale where most combinations fail to render.
    pub max_attempt_factor: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            sampler: DateSamplerOptions::default(),
            max_attempt_factor: 64,
        }
    }
}

impl DatasetConfig {
    /// Create a config collecting `count` pairs.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the sampler options.
    pub fn with_sampler(
        self,
        sampler: DateSamplerOptions,
    ) -> Self {
        Self { sampler, ..self }
    }

    /// Sets the per-pair attempt budget.
    pub fn with_max_attempt_factor(
        self,
        max_attempt_factor: usize,
    ) -> Self {
        Self {
            max_attempt_factor,
            ..self
        }
    }
}

/// A loaded dataset with the vocabularies built from it.
#[derive(Debug, Clone)]
pub struct LoadedDataset<T: TokenType> {
    /// The collected pairs, in generation order.
    pub pairs: Vec<DatePair>,

    /// Vocabularies built from exactly these pairs.
    pub vocabs: DatasetVocabs<T>,
}

/// Generate a dataset of valid date pairs and build its vocabularies.
///
/// Sampling continues until `count` valid pairs are collected; attempts
/// whose format/date combination has no valid rendering are skipped and
/// contribute nothing to the dataset or the vocabularies.
///
/// ## Arguments
/// * `config` - The dataset configuration.
///
/// ## Returns
/// The collected pairs and their vocabularies; `AttemptsExhausted` if the
/// attempt cap is reached first.
pub fn load_dataset<T: TokenType>(config: &DatasetConfig) -> DataResult<LoadedDataset<T>> {
    let mut sampler = config.sampler.clone().init()?;
    let mut builder = VocabularyBuilder::new();
    let mut pairs = Vec::with_capacity(config.count);

    let max_attempts = config.count.saturating_mul(config.max_attempt_factor);
    let mut attempts = 0usize;

    while pairs.len() < config.count {
        if attempts >= max_attempts {
            return Err(DatasetError::AttemptsExhausted {
                requested: config.count,
                attempts,
            });
        }
        attempts += 1;

        let Some(pair) = sampler.next_pair() else {
            continue;
        };
        builder.scan_pair(&pair.human, &pair.machine);
        pairs.push(pair);
    }

    log::info!(
        "generated {} date pairs in {} attempts; human vocab {} chars, machine vocab {} chars",
        pairs.len(),
        attempts,
        builder.human_char_count(),
        builder.machine_char_count(),
    );

    let vocabs = builder.build()?;
    Ok(LoadedDataset { pairs, vocabs })
}
