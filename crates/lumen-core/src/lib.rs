//! lumen core - Basic data structures for pixel-level enhancement
//!
//! This crate provides the data model shared by every lumen transform:
//!
//! - [`PixelGrid`] / [`PixelGridMut`] - The pixel grid (immutable / mutable)
//! - [`Histogram`] - 256-bin per-channel sample counts
//! - [`LookupTable`] - 256-entry sample value mapping
//!
//! Grayscale results are stored as RGB grids whose three channels are
//! equal, so every transform output can be displayed or fed into another
//! transform without a format change.

pub mod error;
pub mod grid;
pub mod histogram;
pub mod lut;

pub use error::{Error, Result};
pub use grid::{Channel, PixelGrid, PixelGridMut};
pub use histogram::Histogram;
pub use lut::{LookupTable, identity_lut, is_monotone};

/// Channel helpers for packed 32-bit RGB samples.
///
/// # Sample format
///
/// Samples are stored as `0xRRGGBB00` (red in MSB, low byte unused).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;

    /// Extract red component from a packed sample.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed sample.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed sample.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a packed RGB sample.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT)
    }

    /// Compose a sample with `value` replicated across all three channels.
    #[inline]
    pub fn compose_gray(value: u8) -> u32 {
        compose_rgb(value, value, value)
    }

    /// Extract RGB values from a packed sample.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Whether all three channels of a sample are equal.
    #[inline]
    pub fn is_gray(pixel: u32) -> bool {
        let (r, g, b) = extract_rgb(pixel);
        r == g && g == b
    }

}
