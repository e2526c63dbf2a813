//! # Attention Map Capture

use datechipper::{CharVocab, InverseVocab, TokenType, encode_chars, normalize};
use datechipper_data::one_hot;
use ndarray::{Array2, Axis};

use crate::errors::{PlotError, PlotResult};
use crate::model::{AttentionModel, ModelInputs};

/// A captured attention matrix with its axis labels.
#[derive(Debug, Clone)]
pub struct AttentionMap {
    /// Attention weights, shape `(output steps, input steps)`; row `t`
    /// is the model's attention distribution at output step `t`.
    pub weights: Array2<f32>,

    /// Decoded model predictions, one label per matrix row.
    pub output_labels: Vec<String>,

    /// Normalized input characters, one per occupied matrix column; the
    /// padded column tail is unlabeled.
    pub input_labels: Vec<char>,
}

/// Run a forward pass and assemble the model's attention matrix.
///
/// The text is encoded to the model's input length and one-hot
/// projected; the decoder states start at zero. One attention row is
/// retrieved per output step and placed row-major into the matrix, so
/// row labels align with prediction steps and column labels with
/// encoded input positions.
///
/// ## Arguments
/// * `model` - The trained model.
/// * `text` - The input text to probe with.
/// * `input_vocab` - The human-side vocabulary the model was trained on.
/// * `inv_output_vocab` - Inverse machine-side vocabulary, for decoding
///   predictions into row labels.
pub fn capture_attention<T, M>(
    model: &M,
    text: &str,
    input_vocab: &CharVocab<T>,
    inv_output_vocab: &InverseVocab<T>,
) -> PlotResult<AttentionMap>
where
    T: TokenType,
    M: AttentionModel,
{
    let input_steps = model.input_steps();
    let output_steps = model.output_steps();

    let encoded = encode_chars(text, input_steps, input_vocab)?;
    let projected = one_hot(&encoded, input_vocab.len())?;
    let inputs = ModelInputs::new(projected.insert_axis(Axis(0)), model.state_width());

    let mut weights = Array2::zeros((output_steps, input_steps));
    for step in 0..output_steps {
        let row = model.attention_at(&inputs, step)?;
        if row.len() != input_steps {
            return Err(PlotError::AttentionShape {
                step,
                expected: input_steps,
                actual: row.len(),
            });
        }
        for (col, &weight) in row.iter().enumerate() {
            weights[(step, col)] = weight;
        }
    }

    let output_labels = decode_predictions(model, &inputs, output_steps, inv_output_vocab)?;

    let input_labels = normalize(text).chars().take(input_steps).collect();

    log::debug!(
        "captured {}x{} attention map for {text:?}",
        output_steps,
        input_steps,
    );

    Ok(AttentionMap {
        weights,
        output_labels,
        input_labels,
    })
}

fn decode_predictions<T, M>(
    model: &M,
    inputs: &ModelInputs,
    output_steps: usize,
    inv_output_vocab: &InverseVocab<T>,
) -> PlotResult<Vec<String>>
where
    T: TokenType,
    M: AttentionModel,
{
    let scores = model.predict(inputs)?;
    let (rows, cols) = scores.dim();
    if rows != output_steps || cols == 0 {
        return Err(PlotError::PredictionShape {
            expected_rows: output_steps,
            actual_rows: rows,
            actual_cols: cols,
        });
    }

    let mut labels = Vec::with_capacity(rows);
    for row in scores.rows() {
        let best = argmax(row.iter().copied());
        let token = T::from_usize(best).ok_or(PlotError::PredictionShape {
            expected_rows: output_steps,
            actual_rows: rows,
            actual_cols: cols,
        })?;
        labels.push(inv_output_vocab.lookup(token)?.to_string());
    }
    Ok(labels)
}

fn argmax<I: Iterator<Item = f32>>(scores: I) -> usize {
    let mut best = 0;
    let mut best_score = f32::NEG_INFINITY;
    for (i, score) in scores.enumerate() {
        if score > best_score {
            best = i;
            best_score = score;
        }
    }
    best
}
