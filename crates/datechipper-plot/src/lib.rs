//! # `datechipper-plot` Attention Diagnostics
//!
//! Captures the per-step attention weights of a trained date
//! normalization model and renders them as a heatmap. The model sits
//! behind the [`model::AttentionModel`] trait; this crate owns all
//! plotting dependencies so the core codec carries none.
//!
//! See:
//! * [`model`] for the trained-model boundary.
//! * [`attention`] to capture an aligned attention matrix.
//! * [`heatmap`] to render it.
#![warn(missing_docs, unused)]

pub mod attention;
pub mod errors;
pub mod heatmap;
pub mod model;

#[doc(inline)]
pub use attention::{AttentionMap, capture_attention};
#[doc(inline)]
pub use errors::{PlotError, PlotResult};
#[doc(inline)]
pub use heatmap::render_heatmap;
#[doc(inline)]
pub use model::{AttentionModel, ModelInputs};
