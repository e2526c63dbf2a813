//! # Trained Model Boundary

use ndarray::{Array2, Array3};

/// One forward-pass input bundle.
///
/// The calling convention is one-hot input plus two zero-initialized
/// decoder state rows; [`ModelInputs::new`] builds the states at the
/// model's configured width.
#[derive(Debug, Clone)]
pub struct ModelInputs {
    /// One-hot encoded input, shape `(1, input steps, input vocab)`.
    pub input: Array3<f32>,

    /// Decoder hidden state, shape `(1, state width)`.
    pub state: Array2<f32>,

    /// Decoder cell state, shape `(1, state width)`.
    pub cell: Array2<f32>,
}

impl ModelInputs {
    /// Bundle a one-hot input with zero states of the given width.
    pub fn new(
        input: Array3<f32>,
        state_width: usize,
    ) -> Self {
        Self {
            input,
            state: Array2::zeros((1, state_width)),
            cell: Array2::zeros((1, state_width)),
        }
    }
}

/// A trained sequence model that exposes its per-step attention weights.
///
/// The model is an external collaborator; implementations adapt whatever
/// inference runtime holds the trained weights. Errors from the forward
/// pass are reported as-is.
pub trait AttentionModel {
    /// Fixed number of input steps the model consumes.
    fn input_steps(&self) -> usize;

    /// Number of output steps the model produces.
    fn output_steps(&self) -> usize;

    /// Width of the decoder state vectors.
    fn state_width(&self) -> usize;

    /// The attention distribution over input steps at one output step.
    ///
    /// ## Arguments
    /// * `inputs` - The forward-pass input bundle.
    /// * `step` - The output step, in `0..output_steps()`.
    ///
    /// ## Returns
    /// A weight per input step; in principle a probability distribution.
    fn attention_at(
        &self,
        inputs: &ModelInputs,
        step: usize,
    ) -> anyhow::Result<Vec<f32>>;

    /// Prediction scores over the output vocabulary for every output
    /// step, shape `(output steps, output vocab)`.
    fn predict(
        &self,
        inputs: &ModelInputs,
    ) -> anyhow::Result<Array2<f32>>;
}
