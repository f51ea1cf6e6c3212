//! lumen-color - Luminance extraction
//!
//! Converts RGB grids to the perceptual luminance (Y band) and stores the
//! result replicated across all three channels, so grayscale grids stay
//! usable wherever an RGB grid is expected.

pub mod colorspace;

// Re-export core types
pub use lumen_core;

pub use colorspace::{
    LUMA_BLUE_WEIGHT, LUMA_GREEN_WEIGHT, LUMA_RED_WEIGHT, convert_to_luminance, rgb_to_luminance,
};
