//! PixelGrid - The pixel container shared by every transform
//!
//! # Sample layout
//!
//! - Samples are stored row-major, one packed `u32` per pixel
//! - Row `r` occupies `data[r * columns..(r + 1) * columns]`
//! - Color order is RGB with red in the MSB (see [`crate::color`])
//!
//! # Ownership model
//!
//! `PixelGrid` uses `Arc` for cheap cloning (shared ownership) and is never
//! modified once built. To produce new pixel data, start from a
//! [`PixelGridMut`] (via [`PixelGrid::try_into_mut`] or [`PixelGrid::to_mut`])
//! and convert it back with `Into<PixelGrid>`.

mod access;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Channel selector for a packed RGB sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Extract this channel from a packed sample.
    #[inline]
    pub fn extract(self, pixel: u32) -> u8 {
        match self {
            Channel::Red => color::red(pixel),
            Channel::Green => color::green(pixel),
            Channel::Blue => color::blue(pixel),
        }
    }

    /// Position of the channel in `Channel::ALL`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Internal grid data
#[derive(Debug)]
struct GridData {
    /// Number of rows
    rows: u32,
    /// Number of columns
    columns: u32,
    /// Packed samples, row-major
    data: Vec<u32>,
}

impl GridData {
    fn zeroed(rows: u32, columns: u32) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidDimension { rows, columns });
        }
        Ok(GridData {
            rows,
            columns,
            data: vec![0u32; rows as usize * columns as usize],
        })
    }
}

/// PixelGrid - Immutable `rows × columns` grid of RGB samples
///
/// # Examples
///
/// ```
/// use lumen_core::PixelGrid;
///
/// let grid = PixelGrid::from_gray(2, 3, &[0, 1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.columns(), 3);
/// assert_eq!(grid.get_gray(1, 2), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct PixelGrid {
    inner: Arc<GridData>,
}

impl PixelGrid {
    /// Create a new grid with every sample black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `rows` or `columns` is 0.
    pub fn new(rows: u32, columns: u32) -> Result<Self> {
        Ok(PixelGrid {
            inner: Arc::new(GridData::zeroed(rows, columns)?),
        })
    }

    /// Create a grid with every sample set to one color.
    pub fn filled(rows: u32, columns: u32, r: u8, g: u8, b: u8) -> Result<Self> {
        let mut inner = GridData::zeroed(rows, columns)?;
        inner.data.fill(color::compose_rgb(r, g, b));
        Ok(PixelGrid {
            inner: Arc::new(inner),
        })
    }

    /// Create a grid from row-major RGB triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `samples.len() != rows * columns`.
    pub fn from_rgb(rows: u32, columns: u32, samples: &[(u8, u8, u8)]) -> Result<Self> {
        let mut inner = GridData::zeroed(rows, columns)?;
        check_len(inner.data.len(), samples.len())?;
        for (dst, &(r, g, b)) in inner.data.iter_mut().zip(samples) {
            *dst = color::compose_rgb(r, g, b);
        }
        Ok(PixelGrid {
            inner: Arc::new(inner),
        })
    }

    /// Create a grid from row-major single-band values.
    ///
    /// Each value is replicated across all three channels.
    pub fn from_gray(rows: u32, columns: u32, values: &[u8]) -> Result<Self> {
        let mut inner = GridData::zeroed(rows, columns)?;
        check_len(inner.data.len(), values.len())?;
        for (dst, &v) in inner.data.iter_mut().zip(values) {
            *dst = color::compose_gray(v);
        }
        Ok(PixelGrid {
            inner: Arc::new(inner),
        })
    }

    /// Get the number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.inner.rows
    }

    /// Get the number of columns.
    #[inline]
    pub fn columns(&self) -> u32 {
        self.inner.columns
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Always false; grids have at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get raw access to the packed samples.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the packed samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row_data(&self, row: u32) -> &[u32] {
        let start = row as usize * self.inner.columns as usize;
        &self.inner.data[start..start + self.inner.columns as usize]
    }

    /// Check if two grids have the same dimensions.
    pub fn sizes_equal(&self, other: &PixelGrid) -> bool {
        self.inner.rows == other.inner.rows && self.inner.columns == other.inner.columns
    }

    /// Check whether every pixel has its three channels equal.
    pub fn is_replicated(&self) -> bool {
        self.inner.data.iter().all(|&p| color::is_gray(p))
    }

    /// Lowest and highest value of one channel over the whole grid.
    pub fn channel_extrema(&self, channel: Channel) -> (u8, u8) {
        self.inner
            .data
            .iter()
            .map(|&p| channel.extract(p))
            .fold((u8::MAX, u8::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    /// Try to get mutable access to the samples.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelGridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelGridMut { inner: data }),
            Err(arc) => Err(PixelGrid { inner: arc }),
        }
    }

    /// Create a mutable copy of this grid.
    pub fn to_mut(&self) -> PixelGridMut {
        PixelGridMut {
            inner: GridData {
                rows: self.inner.rows,
                columns: self.inner.columns,
                data: self.inner.data.clone(),
            },
        }
    }
}

impl PartialEq for PixelGrid {
    fn eq(&self, other: &Self) -> bool {
        self.sizes_equal(other) && self.inner.data == other.inner.data
    }
}

impl Eq for PixelGrid {}

/// Mutable pixel grid
///
/// Allows modification of samples. Convert back to an immutable
/// [`PixelGrid`] using `Into<PixelGrid>`.
#[derive(Debug)]
pub struct PixelGridMut {
    inner: GridData,
}

impl PixelGridMut {
    /// Create a new black mutable grid.
    pub fn new(rows: u32, columns: u32) -> Result<Self> {
        Ok(PixelGridMut {
            inner: GridData::zeroed(rows, columns)?,
        })
    }

    /// Get the number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.inner.rows
    }

    /// Get the number of columns.
    #[inline]
    pub fn columns(&self) -> u32 {
        self.inner.columns
    }

    /// Get raw access to the packed samples.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the packed samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row_data_mut(&mut self, row: u32) -> &mut [u32] {
        let start = row as usize * self.inner.columns as usize;
        let end = start + self.inner.columns as usize;
        &mut self.inner.data[start..end]
    }
}

impl From<PixelGridMut> for PixelGrid {
    fn from(grid: PixelGridMut) -> Self {
        PixelGrid {
            inner: Arc::new(grid.inner),
        }
    }
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_dimension() {
        assert!(matches!(
            PixelGrid::new(0, 4),
            Err(Error::InvalidDimension { rows: 0, columns: 4 })
        ));
        assert!(PixelGrid::new(4, 0).is_err());
    }

    #[test]
    fn test_from_gray_length_mismatch() {
        let err = PixelGrid::from_gray(2, 2, &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_row_major_layout() {
        let grid = PixelGrid::from_gray(2, 3, &[0, 1, 2, 10, 11, 12]).unwrap();
        let row1: Vec<u8> = grid.row_data(1).iter().map(|&p| color::red(p)).collect();
        assert_eq!(row1, vec![10, 11, 12]);
    }

    #[test]
    fn test_row_data_mut_writes_one_row() {
        let mut grid = PixelGridMut::new(3, 2).unwrap();
        for pixel in grid.row_data_mut(1) {
            *pixel = color::compose_gray(77);
        }
        let grid: PixelGrid = grid.into();
        assert_eq!(grid.channel_values(Channel::Red), vec![0, 0, 77, 77, 0, 0]);
    }

    #[test]
    fn test_clone_shares_and_to_mut_copies() {
        let grid = PixelGrid::filled(3, 3, 5, 6, 7).unwrap();
        let shared = grid.clone();
        // Two owners: cannot take exclusive access
        let grid = grid.try_into_mut().unwrap_err();
        let mut copy = grid.to_mut();
        copy.data_mut()[0] = color::compose_gray(0);
        let copy: PixelGrid = copy.into();
        assert_ne!(copy, shared);
        assert_eq!(grid, shared);
    }

    #[test]
    fn test_is_replicated() {
        let gray = PixelGrid::from_gray(2, 2, &[1, 2, 3, 4]).unwrap();
        assert!(gray.is_replicated());
        let rgb = PixelGrid::from_rgb(1, 2, &[(1, 1, 1), (1, 2, 1)]).unwrap();
        assert!(!rgb.is_replicated());
    }

    #[test]
    fn test_channel_extrema() {
        let grid = PixelGrid::from_rgb(1, 3, &[(9, 0, 5), (3, 0, 200), (40, 0, 1)]).unwrap();
        assert_eq!(grid.channel_extrema(Channel::Red), (3, 40));
        assert_eq!(grid.channel_extrema(Channel::Green), (0, 0));
        assert_eq!(grid.channel_extrema(Channel::Blue), (1, 200));
    }
}
