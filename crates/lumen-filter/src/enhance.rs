//! Histogram transforms
//!
//! Histogram expansion (linear contrast stretch), histogram equalization
//! (cumulative-count mapping), and pointwise lookup-table application.
//!
//! Each transform runs three strictly ordered passes: count the histogram,
//! build a [`LookupTable`], then map every pixel. Only the last pass is
//! spread across threads.

use crate::parallel::{PARALLEL_THRESHOLD, map_rows_mut};
use crate::{FilterError, FilterResult};
use lumen_core::{Channel, Histogram, LookupTable, PixelGrid, color, identity_lut};

/// Policy for expanding a grid whose samples all have the same value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Fail with [`FilterError::DegenerateHistogram`]
    #[default]
    Error,
    /// Return an unchanged copy of the input
    Identity,
}

/// Build the histogram expansion lookup table.
///
/// With `min`/`max` the lowest/highest value present, value `f` maps to
/// `(f - min) * 255 / (max - min)` with truncating integer division.
/// Values outside `[min, max]` do not occur in the source histogram and
/// saturate to 0 or 255.
///
/// # Errors
///
/// Returns [`FilterError::DegenerateHistogram`] if `max == min`.
pub fn expansion_lut(hist: &Histogram) -> FilterResult<LookupTable> {
    let (Some(min), Some(max)) = (hist.min_value(), hist.max_value()) else {
        return Ok(identity_lut());
    };
    if min == max {
        return Err(FilterError::DegenerateHistogram { value: min });
    }

    let min = min as u32;
    let range = max as u32 - min;
    let mut lut = [0u8; 256];
    for (f, entry) in lut.iter_mut().enumerate() {
        let f = (f as u32).clamp(min, max as u32);
        *entry = ((f - min) * 255 / range) as u8;
    }
    Ok(lut)
}

/// Expand the histogram of a grid to the full [0, 255] range.
///
/// Uses [`DegeneratePolicy::Error`]; see [`expand_histogram_with`].
pub fn expand_histogram(grid: &PixelGrid) -> FilterResult<PixelGrid> {
    expand_histogram_with(grid, DegeneratePolicy::Error)
}

/// Expand the histogram of a grid to the full [0, 255] range.
///
/// The extrema come from the first channel; each pixel's first-channel
/// value is mapped through [`expansion_lut`] and written to all three
/// channels.
///
/// # Example
///
/// ```
/// use lumen_core::PixelGrid;
/// use lumen_filter::expand_histogram;
///
/// let grid = PixelGrid::from_gray(1, 3, &[50, 100, 150]).unwrap();
/// let out = expand_histogram(&grid).unwrap();
/// let values: Vec<_> = (0..3).map(|c| out.get_gray(0, c).unwrap()).collect();
/// assert_eq!(values, vec![0, 127, 255]);
/// ```
pub fn expand_histogram_with(grid: &PixelGrid, policy: DegeneratePolicy) -> FilterResult<PixelGrid> {
    let hist = grid.gray_histogram();
    log::debug!(
        "expand_histogram: {}x{} grid, range {:?}..={:?}",
        grid.rows(),
        grid.columns(),
        hist.min_value(),
        hist.max_value()
    );

    let lut = match expansion_lut(&hist) {
        Ok(lut) => lut,
        Err(FilterError::DegenerateHistogram { value }) if policy == DegeneratePolicy::Identity => {
            log::debug!("expand_histogram: constant grid ({value}), returning copy");
            return Ok(grid.to_mut().into());
        }
        Err(e) => return Err(e),
    };

    Ok(map_first_channel(grid, &lut))
}

/// Build the histogram equalization lookup table.
///
/// With `histo` the non-zero bin counts in value order:
///
/// - at most one distinct value: identity
/// - `step = (sum(histo) - last(histo)) / 255`; zero step: identity
/// - otherwise `n` starts at `step / 2`, and for every value `v` in order
///   `lut[v] = n / step` before `n` grows by the count of `v`
///
/// Entries above 255 saturate. The table is non-decreasing.
pub fn equalization_lut(hist: &Histogram) -> LookupTable {
    let histo = hist.nonzero_counts();
    let last = match histo.as_slice() {
        [_, .., last] => *last,
        _ => return identity_lut(),
    };

    let step = (histo.iter().sum::<u64>() - last) / 255;
    if step == 0 {
        return identity_lut();
    }

    let mut lut = [0u8; 256];
    let mut n = step / 2;
    for (entry, &count) in lut.iter_mut().zip(hist.counts()) {
        *entry = (n / step).min(255) as u8;
        n += count;
    }
    lut
}

/// Equalize the histogram of a grid.
///
/// One table is built per channel band and applied to that band, so
/// replicated grids stay replicated.
///
/// # Example
///
/// ```
/// use lumen_core::PixelGrid;
/// use lumen_filter::equalize_histogram;
///
/// let grid = PixelGrid::from_gray(2, 2, &[7, 7, 7, 7]).unwrap();
/// // A single distinct value leaves the grid unchanged
/// assert_eq!(equalize_histogram(&grid).unwrap(), grid);
/// ```
pub fn equalize_histogram(grid: &PixelGrid) -> FilterResult<PixelGrid> {
    let luts = Channel::ALL.map(|channel| equalization_lut(&grid.channel_histogram(channel)));
    log::debug!(
        "equalize_histogram: {}x{} grid, red table {}..={}",
        grid.rows(),
        grid.columns(),
        luts[0][0],
        luts[0][255]
    );
    Ok(apply_channel_luts(grid, &luts))
}

/// Map every channel of every pixel through one table.
pub fn apply_lut(grid: &PixelGrid, lut: &LookupTable) -> PixelGrid {
    apply_channel_luts(grid, &[*lut, *lut, *lut])
}

/// Map each channel through its own table (red, green, blue order).
pub fn apply_channel_luts(grid: &PixelGrid, luts: &[LookupTable; 3]) -> PixelGrid {
    map_pixels(grid, |pixel| {
        let (r, g, b) = color::extract_rgb(pixel);
        color::compose_rgb(luts[0][r as usize], luts[1][g as usize], luts[2][b as usize])
    })
}

/// Map the first channel through a table and replicate the result.
fn map_first_channel(grid: &PixelGrid, lut: &LookupTable) -> PixelGrid {
    map_pixels(grid, |pixel| color::compose_gray(lut[color::red(pixel) as usize]))
}

fn map_pixels(grid: &PixelGrid, f: impl Fn(u32) -> u32 + Sync + Send) -> PixelGrid {
    let mut out = grid.to_mut();
    let columns = out.columns() as usize;
    map_rows_mut(out.data_mut(), columns, PARALLEL_THRESHOLD, |_, line| {
        for pixel in line.iter_mut() {
            *pixel = f(*pixel);
        }
    });
    out.into()
}
