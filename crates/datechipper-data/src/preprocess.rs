//! # Model-Ready Batch Projection
//!
//! Encodes a loaded dataset into fixed-length id matrices and expands
//! them into one-hot tensors for model consumption. The tensor types
//! stop here; the core codec has no numeric-library dependency.

use datechipper::{DatasetVocabs, TokenType, encode_chars};
use ndarray::{Array2, Array3};

use crate::errors::{DataResult, DatasetError};
use crate::sampler::DatePair;

/// Expand a token sequence into a one-hot matrix of shape
/// `(sequence length, depth)`.
///
/// ## Arguments
/// * `tokens` - The token sequence.
/// * `depth` - The one-hot depth, normally the vocabulary size.
///
/// ## Returns
/// The one-hot matrix, or `OneHotOverflow` if a token does not fit the
/// depth.
pub fn one_hot<T: TokenType>(
    tokens: &[T],
    depth: usize,
) -> DataResult<Array2<f32>> {
    let mut out = Array2::zeros((tokens.len(), depth));
    for (row, token) in tokens.iter().enumerate() {
        let index = token
            .to_usize()
            .filter(|&i| i < depth)
            .ok_or_else(|| DatasetError::OneHotOverflow {
                token: token.to_usize().unwrap_or(usize::MAX),
                depth,
            })?;
        out[(row, index)] = 1.0;
    }
    Ok(out)
}

/// Model-ready projection of an encoded dataset.
#[derive(Debug, Clone)]
pub struct PreparedDataset<T: TokenType> {
    /// Encoded human-side ids, shape `(examples, input steps)`.
    pub input_ids: Array2<T>,

    /// Encoded machine-side ids, shape `(examples, output steps)`.
    pub target_ids: Array2<T>,

    /// One-hot input tensor, shape `(examples, input steps, human vocab)`.
    pub input_onehot: Array3<f32>,

    /// One-hot target tensor, shape `(examples, output steps, machine vocab)`.
    pub target_onehot: Array3<f32>,
}

/// Encode and one-hot project a dataset.
///
/// ## Arguments
/// * `pairs` - The dataset examples.
/// * `vocabs` - The vocabularies built from the same corpus.
/// * `input_steps` - Fixed encoded length of the human side.
/// * `output_steps` - Fixed encoded length of the machine side.
pub fn preprocess<T: TokenType>(
    pairs: &[DatePair],
    vocabs: &DatasetVocabs<T>,
    input_steps: usize,
    output_steps: usize,
) -> DataResult<PreparedDataset<T>> {
    let examples = pairs.len();

    let mut input_flat = Vec::with_capacity(examples * input_steps);
    let mut target_flat = Vec::with_capacity(examples * output_steps);
    for pair in pairs {
        input_flat.extend(encode_chars(&pair.human, input_steps, &vocabs.human)?);
        target_flat.extend(encode_chars(&pair.machine, output_steps, &vocabs.machine)?);
    }

    let input_ids = Array2::from_shape_vec((examples, input_steps), input_flat)
        .map_err(|e| DatasetError::Shape(e.to_string()))?;
    let target_ids = Array2::from_shape_vec((examples, output_steps), target_flat)
        .map_err(|e| DatasetError::Shape(e.to_string()))?;

    let input_onehot = expand_batch(&input_ids, vocabs.human.len())?;
    let target_onehot = expand_batch(&target_ids, vocabs.machine.len())?;

    Ok(PreparedDataset {
        input_ids,
        target_ids,
        input_onehot,
        target_onehot,
    })
}

fn expand_batch<T: TokenType>(
    ids: &Array2<T>,
    depth: usize,
) -> DataResult<Array3<f32>> {
    let (examples, steps) = ids.dim();
    let mut out = Array3::zeros((examples, steps, depth));
    for ((row, col), token) in ids.indexed_iter() {
        let index = token
            .to_usize()
            .filter(|&i| i < depth)
            .ok_or_else(|| DatasetError::OneHotOverflow {
                token: token.to_usize().unwrap_or(usize::MAX),
                depth,
            })?;
        out[(row, col, index)] = 1.0;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use datechipper::VocabularyBuilder;
    use num_traits::ToPrimitive;

    use super::*;

    type T = u32;

    fn sample_pairs() -> Vec<DatePair> {
        vec![
            DatePair {
                human: "9 may 1998".to_string(),
                machine: "1998-05-09".to_string(),
            },
            DatePair {
                human: "saturday may 9 1998".to_string(),
                machine: "1998-05-09".to_string(),
            },
        ]
    }

    fn sample_vocabs() -> DatasetVocabs<T> {
        let mut builder = VocabularyBuilder::new();
        builder.scan_pairs(sample_pairs().iter().map(|p| (p.human.clone(), p.machine.clone())));
        builder.build().unwrap()
    }

    #[test]
    fn test_one_hot_rows_sum_to_one() {
        let grid = one_hot::<T>(&[2, 0, 1], 4).unwrap();
        assert_eq!(grid.dim(), (3, 4));

        for row in grid.rows() {
            assert_eq!(row.sum(), 1.0);
        }
        assert_eq!(grid[(0, 2)], 1.0);
        assert_eq!(grid[(1, 0)], 1.0);
        assert_eq!(grid[(2, 1)], 1.0);
    }

    #[test]
    fn test_one_hot_overflow() {
        assert!(matches!(
            one_hot::<T>(&[5], 4),
            Err(DatasetError::OneHotOverflow { token: 5, depth: 4 })
        ));
    }

    #[test]
    fn test_preprocess_shapes() {
        let pairs = sample_pairs();
        let vocabs = sample_vocabs();

        let prepared = preprocess(&pairs, &vocabs, 30, 10).unwrap();

        assert_eq!(prepared.input_ids.dim(), (2, 30));
        assert_eq!(prepared.target_ids.dim(), (2, 10));
        assert_eq!(prepared.input_onehot.dim(), (2, 30, vocabs.human.len()));
        assert_eq!(prepared.target_onehot.dim(), (2, 10, vocabs.machine.len()));
    }

    #[test]
    fn test_onehot_agrees_with_ids() {
        let pairs = sample_pairs();
        let vocabs = sample_vocabs();

        let prepared = preprocess(&pairs, &vocabs, 30, 10).unwrap();

        for ((row, col), token) in prepared.input_ids.indexed_iter() {
            let index = token.to_usize().unwrap();
            assert_eq!(prepared.input_onehot[(row, col, index)], 1.0);
        }
        for slice in prepared.target_onehot.rows() {
            assert_eq!(slice.sum(), 1.0);
        }
    }
}
