//! lumen-filter - Mask convolution and histogram transforms
//!
//! This crate provides the numeric transforms applied to luminance grids:
//!
//! - Convolution with caller-supplied square masks ([`convolve`])
//! - Histogram expansion, a linear stretch to [0, 255] ([`enhance`])
//! - Histogram equalization through a cumulative-count lookup table
//!
//! Every transform takes a grid by reference and returns a new grid, so
//! outputs can be chained freely.

pub mod convolve;
pub mod enhance;
mod error;
pub mod mask;
mod parallel;

pub use error::{FilterError, FilterResult};
pub use mask::Mask;
pub use parallel::PARALLEL_THRESHOLD;

// Re-export commonly used functions
pub use convolve::{ConvolveOptions, SampleOverflow, convolve, convolve_with};
pub use enhance::{
    DegeneratePolicy, apply_channel_luts, apply_lut, equalization_lut, equalize_histogram,
    expand_histogram, expand_histogram_with, expansion_lut,
};
