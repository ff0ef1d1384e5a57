//! Lookup keys and errors for the grid's two-key subscript contract.

use std::ops::Range;

use thiserror::Error;

/// One component of a grid subscript.
///
/// Ranges exist so callers can express slice-style subscripts; the grid
/// rejects them, matching its fixed-tree contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridKey {
    /// A single zero-based index.
    At(usize),
    /// A half-open index range.
    Span(Range<usize>),
}

impl From<usize> for GridKey {
    #[inline]
    fn from(index: usize) -> Self {
        Self::At(index)
    }
}

impl From<Range<usize>> for GridKey {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::Span(range)
    }
}

/// Errors raised by grid lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A subscript component was a range.
    #[error("grid lookups do not support slicing")]
    SlicingUnsupported,

    /// The subscript did not have exactly two components.
    #[error("grid lookups take exactly two keys, got {0}")]
    KeyCount(usize),

    /// The column/row pair falls outside the grid.
    #[error("cell ({column}, {row}) is out of bounds for a {columns}x{rows} grid")]
    OutOfBounds {
        /// Requested column index.
        column: usize,
        /// Requested row index.
        row: usize,
        /// Number of columns in the grid.
        columns: usize,
        /// Number of rows in the grid.
        rows: usize,
    },
}
