//! Mask convolution
//!
//! Applies a caller-supplied [`Mask`] to the first channel of a grid.
//!
//! # Window alignment
//!
//! With a mask of side `m` and border `b = m - 1`, the input pixel `(i, j)`
//! for `b <= i < rows - b`, `b <= j < columns - b` contributes the window of
//! rows `i..i + m` and columns `j..j + m`: the window starts at the pixel
//! and extends forward, it is not centered on it. The weighted sum is
//! written to output pixel `(i - b, j - b)`, so the output is cropped by a
//! full mask width minus one on every side:
//! `(rows - 2b) x (columns - 2b)`.

use crate::parallel::{PARALLEL_THRESHOLD, map_rows_mut};
use crate::{FilterError, FilterResult, Mask};
use lumen_core::{PixelGrid, PixelGridMut, color};

/// What to do with a convolution sum outside [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleOverflow {
    /// Saturate to 0 or 255
    #[default]
    Clamp,
    /// Fail with [`FilterError::OutOfRangeSample`]
    Reject,
}

/// Options for [`convolve_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvolveOptions {
    /// Policy for sums outside [0, 255]
    pub overflow: SampleOverflow,
    /// Output pixel count from which rows are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for ConvolveOptions {
    fn default() -> Self {
        Self {
            overflow: SampleOverflow::Clamp,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl ConvolveOptions {
    /// Set the overflow policy.
    pub fn with_overflow(mut self, overflow: SampleOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set the parallel threshold (0 always parallel, `usize::MAX` never).
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Convolve a grid with a mask using default options (clamping).
///
/// See [`convolve_with`].
pub fn convolve(grid: &PixelGrid, mask: &Mask) -> FilterResult<PixelGrid> {
    convolve_with(grid, mask, &ConvolveOptions::default())
}

/// Convolve the first channel of a grid with a mask.
///
/// Each output sum is truncated toward zero, then resolved through
/// `options.overflow`, and written to all three channels.
///
/// # Errors
///
/// - [`FilterError::GridTooSmall`] if `rows <= 2b` or `columns <= 2b`
/// - [`FilterError::OutOfRangeSample`] under [`SampleOverflow::Reject`],
///   naming the first offending output pixel in row-major order
///
/// # Example
///
/// ```
/// use lumen_core::PixelGrid;
/// use lumen_filter::{Mask, convolve};
///
/// let grid = PixelGrid::from_gray(6, 7, &[50; 42]).unwrap();
/// let mask = Mask::from_slice(3, &[0.25; 9]).unwrap();
/// let out = convolve(&grid, &mask).unwrap();
/// assert_eq!((out.rows(), out.columns()), (2, 3));
/// // weights sum to 2.25: 50 * 2.25 = 112.5 -> 112
/// assert_eq!(out.get_gray(0, 0), Some(112));
/// ```
pub fn convolve_with(
    grid: &PixelGrid,
    mask: &Mask,
    options: &ConvolveOptions,
) -> FilterResult<PixelGrid> {
    let rows = grid.rows();
    let columns = grid.columns();
    let border = mask.border();

    if rows <= 2 * border || columns <= 2 * border {
        return Err(FilterError::GridTooSmall {
            rows,
            columns,
            border,
        });
    }

    let out_rows = rows - 2 * border;
    let out_columns = columns - 2 * border;
    log::debug!(
        "convolve: {}x{} grid, {}x{} mask, output {}x{}",
        rows,
        columns,
        mask.dim(),
        mask.dim(),
        out_rows,
        out_columns
    );

    let mut out = PixelGridMut::new(out_rows, out_columns)?;

    // Each row reports its first out-of-range sum, if any
    let overflows = map_rows_mut(
        out.data_mut(),
        out_columns as usize,
        options.parallel_threshold,
        |out_row, line| {
            let i = out_row as u32 + border;
            let mut first_overflow = None;
            for (out_col, dst) in line.iter_mut().enumerate() {
                let j = out_col as u32 + border;
                let value = window_sum(grid, mask, i, j).trunc();
                let clamped = value.clamp(0.0, 255.0);
                if clamped != value && first_overflow.is_none() {
                    first_overflow = Some((out_col as u32, value as i64));
                }
                *dst = color::compose_gray(clamped as u8);
            }
            first_overflow
        },
    );

    if options.overflow == SampleOverflow::Reject
        && let Some((row, (column, value))) = overflows
            .iter()
            .enumerate()
            .find_map(|(row, hit)| hit.map(|h| (row as u32, h)))
    {
        return Err(FilterError::OutOfRangeSample { row, column, value });
    }

    Ok(out.into())
}

/// Weighted sum of the `m x m` window whose top-left corner is `(i, j)`.
#[inline]
fn window_sum(grid: &PixelGrid, mask: &Mask, i: u32, j: u32) -> f64 {
    let mut sum = 0.0f64;
    for mr in 0..mask.dim() {
        let line = grid.row_data(i + mr as u32);
        let start = j as usize;
        for (&pixel, &weight) in line[start..start + mask.dim()].iter().zip(mask.row(mr)) {
            sum += color::red(pixel) as f64 * weight;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_mask() -> Mask {
        Mask::from_rows(&[[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]).unwrap()
    }

    #[test]
    fn test_pinned_window_alignment() {
        #[rustfmt::skip]
        let values = [
            0, 0, 0, 0, 0,
            0, 10, 10, 10, 0,
            0, 10, 20, 10, 0,
            0, 10, 10, 10, 0,
            0, 0, 0, 0, 0,
        ];
        let grid = PixelGrid::from_gray(5, 5, &values).unwrap();
        let out = convolve(&grid, &identity_mask()).unwrap();
        assert_eq!((out.rows(), out.columns()), (1, 1));
        // Window at (2, 2) covers rows 2..5, columns 2..5; its center is (3, 3)
        assert_eq!(out.get_rgb(0, 0), Some((10, 10, 10)));
    }

    #[test]
    fn test_row_column_order() {
        // Distinct values everywhere: value = 10 * row + column
        let values: Vec<u8> = (0..7u8)
            .flat_map(|r| (0..9u8).map(move |c| 10 * r + c))
            .collect();
        let grid = PixelGrid::from_gray(7, 9, &values).unwrap();
        // Pick the top-right weight of the window: offset (0, 2)
        let mask = Mask::from_rows(&[[0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]).unwrap();
        let out = convolve(&grid, &mask).unwrap();
        assert_eq!((out.rows(), out.columns()), (3, 5));
        // Output (r, c) reads input (r + 2 + 0, c + 2 + 2)
        assert_eq!(out.get_gray(0, 0), Some(24));
        assert_eq!(out.get_gray(2, 4), Some(48));
        assert_eq!(out.get_gray(1, 3), Some(37));
    }

    #[test]
    fn test_constant_grid() {
        let grid = PixelGrid::from_gray(10, 10, &[40; 100]).unwrap();
        let mask = Mask::from_rows(&[[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]]).unwrap();
        let out = convolve(&grid, &mask).unwrap();
        assert!(out.data().iter().all(|&p| color::extract_rgb(p) == (40, 40, 40)));
    }

    #[test]
    fn test_clamps_by_default() {
        let grid = PixelGrid::from_gray(5, 5, &[100; 25]).unwrap();
        let hot = Mask::from_slice(3, &[1.0; 9]).unwrap();
        let cold = Mask::from_slice(3, &[-1.0; 9]).unwrap();
        assert_eq!(convolve(&grid, &hot).unwrap().get_gray(0, 0), Some(255));
        assert_eq!(convolve(&grid, &cold).unwrap().get_gray(0, 0), Some(0));
    }

    #[test]
    fn test_truncates_toward_zero() {
        let grid = PixelGrid::from_gray(5, 5, &[3; 25]).unwrap();
        // -1/8 weights everywhere except 1 at the center: 3 - 8 * 3/8 = 0
        let mut weights = [-0.125; 9];
        weights[4] = 1.0;
        let mask = Mask::from_slice(3, &weights).unwrap();
        assert_eq!(convolve(&grid, &mask).unwrap().get_gray(0, 0), Some(0));

        let tenth = Mask::from_slice(3, &[0.1; 9]).unwrap();
        // 9 * 0.1 * 3 = 2.7 -> 2
        assert_eq!(convolve(&grid, &tenth).unwrap().get_gray(0, 0), Some(2));
    }

    #[test]
    fn test_reject_reports_first_overflow() {
        let mut values = [0u8; 36];
        values[6 * 4 + 5] = 200; // row 4, column 5
        values[6 * 5 + 4] = 200; // row 5, column 4
        let grid = PixelGrid::from_gray(6, 6, &values).unwrap();
        let mask = Mask::from_slice(3, &[2.0; 9]).unwrap();
        let options = ConvolveOptions::default().with_overflow(SampleOverflow::Reject);
        let err = convolve_with(&grid, &mask, &options).unwrap_err();
        // Output (0, 0) reads rows 2..5, columns 2..5 and misses both hot
        // pixels; (0, 1) is the first window to reach one
        assert!(matches!(
            err,
            FilterError::OutOfRangeSample {
                row: 0,
                column: 1,
                value: 400
            }
        ));
    }

    #[test]
    fn test_grid_too_small() {
        let grid = PixelGrid::from_gray(4, 9, &[0; 36]).unwrap();
        let err = convolve(&grid, &identity_mask()).unwrap_err();
        assert!(matches!(
            err,
            FilterError::GridTooSmall {
                rows: 4,
                columns: 9,
                border: 2
            }
        ));
    }

    #[test]
    fn test_input_unchanged() {
        let grid = PixelGrid::from_gray(6, 6, &[9; 36]).unwrap();
        let before = grid.clone();
        let _ = convolve(&grid, &Mask::from_slice(3, &[1.0; 9]).unwrap()).unwrap();
        assert_eq!(grid, before);
    }
}
