//! Error types for grid construction.

use thiserror::Error;

use crate::geom::Point;

/// A grid could not be built from the supplied dimensions and cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// `rows` or `cols` was zero.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions { rows: usize, cols: usize },
    /// `rows * cols + 2` does not fit in a cell value.
    #[error("grid of {rows}x{cols} cells is too large to encode")]
    TooLarge { rows: usize, cols: usize },
    /// Wrong number of rows (border rows included).
    #[error("expected {expected} rows including the border, found {found}")]
    RowCount { expected: usize, found: usize },
    /// A row has the wrong number of entries (border columns included).
    #[error("row {row}: expected {expected} values including the border, found {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat cell buffer has the wrong length.
    #[error("expected {expected} cells including the border, found {found}")]
    CellCount { expected: usize, found: usize },
    /// A point that must lie inside the interior does not.
    #[error("{point} is not an interior cell")]
    NotInterior { point: Point },
}
