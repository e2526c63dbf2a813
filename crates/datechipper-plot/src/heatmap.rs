//! # Attention Heatmap Rendering

use std::path::Path;

use plotters::prelude::*;

use crate::attention::AttentionMap;
use crate::errors::{PlotError, PlotResult};

/// Render an attention map as a bitmap heatmap.
///
/// Rows (predicted output characters) run top to bottom; columns (input
/// characters) left to right. Cell intensity follows the attention
/// weight on a white-to-blue ramp.
///
/// ## Arguments
/// * `map` - The captured attention map.
/// * `path` - The output image path.
/// * `size` - The image size in pixels, `(width, height)`.
pub fn render_heatmap(
    map: &AttentionMap,
    path: &Path,
    size: (u32, u32),
) -> PlotResult<()> {
    let (output_steps, input_steps) = map.weights.dim();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(to_render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("attention weights", ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..input_steps as i32, 0..output_steps as i32)
        .map_err(to_render_error)?;

    let output_labels = map.output_labels.clone();
    let input_labels = map.input_labels.clone();

    chart
        .configure_mesh()
        .x_desc("input sequence")
        .y_desc("output sequence")
        .x_labels(input_steps)
        .y_labels(output_steps)
        .x_label_formatter(&move |&col: &i32| {
            input_labels
                .get(col as usize)
                .map(|c| c.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&move |&row: &i32| {
            // Row 0 of the matrix is drawn at the top.
            let flipped = output_steps as i32 - 1 - row;
            output_labels
                .get(flipped as usize)
                .cloned()
                .unwrap_or_default()
        })
        .disable_x_mesh()
        .disable_y_mesh()
        .draw()
        .map_err(to_render_error)?;

    chart
        .draw_series((0..output_steps).flat_map(|row| {
            let weights = &map.weights;
            (0..input_steps).map(move |col| {
                let weight = weights[(row, col)].clamp(0.0, 1.0);
                let fade = (255.0 * (1.0 - weight)) as u8;
                let color = RGBColor(fade, fade, 255);

                let x = col as i32;
                let y = output_steps as i32 - 1 - row as i32;
                Rectangle::new([(x, y), (x + 1, y + 1)], color.filled())
            })
        }))
        .map_err(to_render_error)?;

    root.present().map_err(to_render_error)?;

    log::info!("wrote attention heatmap to {}", path.display());
    Ok(())
}

fn to_render_error<E: std::error::Error>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}
