//! Error types for lumen-filter
//!
//! Every transform reports failures synchronously through [`FilterError`];
//! no partial result is returned.

use thiserror::Error;

/// Errors that can occur during filtering and histogram transforms
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lumen_core::Error),

    /// Mask is not square, smaller than 3, or has an even side
    #[error("invalid mask dimension: {rows}x{columns} (expected odd square >= 3)")]
    InvalidMaskDimension { rows: usize, columns: usize },

    /// Mask weight is NaN or infinite
    #[error("non-finite mask weight at ({row}, {column}): {value}")]
    NonFiniteWeight { row: usize, column: usize, value: f64 },

    /// Grid has no interior left after cropping the mask border
    #[error("grid {rows}x{columns} too small for mask border {border}")]
    GridTooSmall { rows: u32, columns: u32, border: u32 },

    /// Histogram holds a single value, so the expansion range is empty
    #[error("degenerate histogram: every sample equals {value}")]
    DegenerateHistogram { value: u8 },

    /// Convolution sum outside [0, 255] under the reject policy
    #[error("sample out of range at ({row}, {column}): {value}")]
    OutOfRangeSample { row: u32, column: u32, value: i64 },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
