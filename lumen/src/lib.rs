//! lumen - Pixel-level image enhancement
//!
//! Luminance extraction, mask convolution and histogram transforms over
//! in-memory pixel grids, plus an [`experiment`] driver that runs a list
//! of named masks and the histogram transform chains on one source image.
//!
//! Decoding, display and persistence are left to the caller: hand in a
//! [`PixelGrid`], get new grids back.
//!
//! # Example
//!
//! ```
//! use lumen::PixelGrid;
//! use lumen::color::convert_to_luminance;
//! use lumen::filter::{Mask, convolve, equalize_histogram};
//!
//! let rgb = PixelGrid::filled(8, 8, 200, 100, 50).unwrap();
//! let y = convert_to_luminance(&rgb);
//! let sharpen = Mask::from_rows(&[[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]]).unwrap();
//! let sharpened = convolve(&y, &sharpen).unwrap();
//! assert_eq!((sharpened.rows(), sharpened.columns()), (4, 4));
//! let equalized = equalize_histogram(&y).unwrap();
//! assert!(equalized.is_replicated());
//! ```

pub mod experiment;

// Re-export core types (primary data structures used everywhere)
pub use lumen_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use lumen_color as color;
pub use lumen_filter as filter;

pub use experiment::{Experiment, ExperimentReport, HistogramSuite, MaskOutcome};
