//! Row-parallel helpers
//!
//! Output rows of a transform are independent, so large grids are split
//! into disjoint row slices and processed on the rayon pool. Small grids
//! stay sequential.

use rayon::prelude::*;

/// Default pixel count from which row work is spread across threads.
pub const PARALLEL_THRESHOLD: usize = 65_536;

/// Run `row_fn` over every row of a row-major buffer and collect one result
/// per row, in row order.
///
/// Rows are processed in parallel when `data.len() >= threshold`. The
/// result is identical either way.
pub(crate) fn map_rows_mut<R, F>(data: &mut [u32], columns: usize, threshold: usize, row_fn: F) -> Vec<R>
where
    R: Send,
    F: Fn(usize, &mut [u32]) -> R + Sync + Send,
{
    if data.len() >= threshold {
        data.par_chunks_mut(columns)
            .enumerate()
            .map(|(row, line)| row_fn(row, line))
            .collect()
    } else {
        data.chunks_mut(columns)
            .enumerate()
            .map(|(row, line)| row_fn(row, line))
            .collect()
    }
}
