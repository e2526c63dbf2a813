//! Renders a heatmap for a toy diagonal-attention model.
//!
//! Stands in for a trained model so the capture/render path can be
//! exercised without an inference runtime.

use std::path::Path;

use datechipper_data::{DatasetConfig, DateSamplerOptions, LoadedDataset, load_dataset};
use datechipper_plot::{AttentionModel, ModelInputs, capture_attention, render_heatmap};
use ndarray::Array2;

struct DiagonalModel {
    output_vocab: usize,
}

impl AttentionModel for DiagonalModel {
    fn input_steps(&self) -> usize {
        30
    }

    fn output_steps(&self) -> usize {
        10
    }

    fn state_width(&self) -> usize {
        128
    }

    fn attention_at(
        &self,
        _inputs: &ModelInputs,
        step: usize,
    ) -> anyhow::Result<Vec<f32>> {
        let mut row = vec![0.02; self.input_steps()];
        row[step * 2 % self.input_steps()] = 0.8;
        Ok(row)
    }

    fn predict(
        &self,
        _inputs: &ModelInputs,
    ) -> anyhow::Result<Array2<f32>> {
        let mut scores = Array2::zeros((self.output_steps(), self.output_vocab));
        for step in 0..self.output_steps() {
            scores[(step, step % self.output_vocab)] = 1.0;
        }
        Ok(scores)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DatasetConfig::new(1000).with_sampler(DateSamplerOptions::new(12345));
    let dataset: LoadedDataset<u32> = load_dataset(&config)?;

    let model = DiagonalModel {
        output_vocab: dataset.vocabs.machine.len(),
    };

    let map = capture_attention(
        &model,
        "Tuesday 09 Oct 1993",
        &dataset.vocabs.human,
        &dataset.vocabs.inv_machine,
    )?;

    let path = Path::new("attention.png");
    render_heatmap(&map, path, (800, 640))?;
    println!("wrote {}", path.display());

    Ok(())
}
