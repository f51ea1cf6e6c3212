//! Color space conversion
//!
//! RGB -> luminance using the ITU-R BT.601 weights.

use lumen_core::{PixelGrid, color};

/// Red weight of the luminance sum
pub const LUMA_RED_WEIGHT: f64 = 0.299;
/// Green weight of the luminance sum
pub const LUMA_GREEN_WEIGHT: f64 = 0.587;
/// Blue weight of the luminance sum
pub const LUMA_BLUE_WEIGHT: f64 = 0.114;

/// Convert one RGB sample to luminance.
///
/// Formula: `Y = trunc(0.299*R + 0.587*G + 0.114*B)`. The weighted sum is
/// truncated, not rounded.
#[inline]
pub fn rgb_to_luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = r as f64 * LUMA_RED_WEIGHT + g as f64 * LUMA_GREEN_WEIGHT + b as f64 * LUMA_BLUE_WEIGHT;
    // Weights sum to 1, so y never exceeds 255
    y as u8
}

/// Convert an RGB grid to a luminance grid.
///
/// The output has the same dimensions; every pixel holds its luminance in
/// all three channels. The input is not modified.
///
/// # Example
///
/// ```
/// use lumen_color::convert_to_luminance;
/// use lumen_core::PixelGrid;
///
/// let rgb = PixelGrid::from_rgb(1, 2, &[(255, 0, 0), (10, 20, 30)]).unwrap();
/// let y = convert_to_luminance(&rgb);
/// assert_eq!(y.get_rgb(0, 0), Some((76, 76, 76)));
/// assert_eq!(y.get_rgb(0, 1), Some((18, 18, 18)));
/// ```
pub fn convert_to_luminance(grid: &PixelGrid) -> PixelGrid {
    log::debug!(
        "convert_to_luminance: {}x{} grid",
        grid.rows(),
        grid.columns()
    );

    let mut out = grid.to_mut();
    for pixel in out.data_mut() {
        let (r, g, b) = color::extract_rgb(*pixel);
        *pixel = color::compose_gray(rgb_to_luminance(r, g, b));
    }
    out.into()
}
