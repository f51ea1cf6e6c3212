//! Convolution masks
//!
//! A [`Mask`] is a square matrix of real-valued weights supplied by the
//! caller. The shape must be an odd square and every weight finite.

use crate::{FilterError, FilterResult};

/// A square convolution mask of odd side >= 3
///
/// Weights are stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    /// Side length
    dim: usize,
    /// Weights (row-major order)
    data: Vec<f64>,
}

impl Mask {
    /// Create a mask from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidMaskDimension`] if the rows do not form
    /// a square, or the side is even or below 3, and
    /// [`FilterError::NonFiniteWeight`] for a NaN or infinite weight.
    ///
    /// # Example
    ///
    /// ```
    /// use lumen_filter::Mask;
    ///
    /// let emboss = Mask::from_rows(&[
    ///     [0.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, -1.0],
    /// ]).unwrap();
    /// assert_eq!(emboss.dim(), 3);
    /// assert_eq!(emboss.sum(), 0.0);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> FilterResult<Self> {
        let dim = rows.len();
        if let Some(bad) = rows.iter().map(|r| r.as_ref().len()).find(|&len| len != dim) {
            return Err(FilterError::InvalidMaskDimension {
                rows: dim,
                columns: bad,
            });
        }
        let data = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::validated(dim, data)
    }

    /// Create a mask from row-major weights.
    pub fn from_slice(dim: usize, data: &[f64]) -> FilterResult<Self> {
        if dim.checked_mul(dim) != Some(data.len()) {
            return Err(FilterError::InvalidMaskDimension {
                rows: dim,
                columns: if dim == 0 { data.len() } else { data.len() / dim },
            });
        }
        Self::validated(dim, data.to_vec())
    }

    fn validated(dim: usize, data: Vec<f64>) -> FilterResult<Self> {
        if dim < 3 || dim % 2 == 0 {
            return Err(FilterError::InvalidMaskDimension {
                rows: dim,
                columns: dim,
            });
        }
        if let Some(i) = data.iter().position(|w| !w.is_finite()) {
            return Err(FilterError::NonFiniteWeight {
                row: i / dim,
                column: i % dim,
                value: data[i],
            });
        }
        Ok(Mask { dim, data })
    }

    /// Side length of the mask.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Pixels cropped from each side of a convolved grid (`dim - 1`).
    #[inline]
    pub fn border(&self) -> u32 {
        (self.dim - 1) as u32
    }

    /// Weights in row-major order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Weights of one mask row.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.dim..(row + 1) * self.dim]
    }

    /// Get the weight at `(row, column)`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row < self.dim && column < self.dim {
            Some(self.data[row * self.dim + column])
        } else {
            None
        }
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}
