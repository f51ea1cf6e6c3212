//! Error types for lumen-core
//!
//! Provides a unified error type for grid construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal storage details.

use thiserror::Error;

/// lumen-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {rows}x{columns}")]
    InvalidDimension { rows: u32, columns: u32 },

    /// Sample buffer does not match the grid dimensions
    #[error("dimension mismatch: expected {expected} samples, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Coordinate outside the grid
    #[error("index out of bounds: ({row}, {column}) in {rows}x{columns} grid")]
    IndexOutOfBounds {
        row: u32,
        column: u32,
        rows: u32,
        columns: u32,
    },
}

/// Result type alias for lumen-core operations
pub type Result<T> = std::result::Result<T, Error>;
