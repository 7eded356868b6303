//! Dense boolean matrix recording which edges must not be created.
//!
//! A set cell `[row][col]` means "no edge from `row` to `col`". A column with
//! every cell set therefore belongs to a vertex that nothing will target.

use crate::{Error, Result};
use crate::error::try_filled;
use std::ops::Range;

/// Failure matrix stored as one flat row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMatrix {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl FailureMatrix {
    /// Create a `height x width` matrix with every cell cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`](crate::Error::Allocation) if the buffer
    /// size overflows or cannot be allocated.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let len = height
            .checked_mul(width)
            .ok_or(Error::Allocation {
                what: "failure matrix",
                requested: usize::MAX,
            })?;
        let cells = try_filled(len, false, "failure matrix")?;
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    const fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> Error {
        Error::CellOutOfBounds {
            row,
            col,
            height: self.height,
            width: self.width,
        }
    }

    /// Read the cell at `[row][col]`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.offset(row, col).map(|offset| self.cells[offset])
    }

    /// Write `value` at `[row][col]`, and at `[col][row]` too when `symmetric`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] if either written cell is outside
    /// the matrix. Nothing is written in that case.
    pub fn set(&mut self, row: usize, col: usize, value: bool, symmetric: bool) -> Result<()> {
        let offset = self
            .offset(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        if symmetric {
            let mirror = self
                .offset(col, row)
                .ok_or_else(|| self.out_of_bounds(col, row))?;
            self.cells[mirror] = value;
        }
        self.cells[offset] = value;
        Ok(())
    }

    /// Whether every row of `col` is set. Columns outside the matrix are never full.
    #[must_use]
    pub fn column_is_full(&self, col: usize) -> bool {
        col < self.width && (0..self.height).all(|row| self.get(row, col) == Some(true))
    }

    /// Set every row of `col`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] if `col` is outside the matrix.
    pub fn fill_column(&mut self, col: usize) -> Result<()> {
        if col >= self.width {
            return Err(self.out_of_bounds(0, col));
        }
        for row in 0..self.height {
            self.set(row, col, true, false)?;
        }
        Ok(())
    }

    /// Set every column of `row`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] if `row` is outside the matrix.
    pub fn fill_row(&mut self, row: usize) -> Result<()> {
        if row >= self.height {
            return Err(self.out_of_bounds(row, 0));
        }
        for col in 0..self.width {
            self.set(row, col, true, false)?;
        }
        Ok(())
    }

    /// Count the full columns within `cols`.
    #[must_use]
    pub fn full_columns(&self, cols: Range<usize>) -> usize {
        cols.filter(|&col| self.column_is_full(col)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_is_clear() {
        let matrix = FailureMatrix::new(3, 4).unwrap();
        assert_eq!(matrix.height(), 3);
        assert_eq!(matrix.width(), 4);
        assert!((0..3).all(|r| (0..4).all(|c| matrix.get(r, c) == Some(false))));
        assert_eq!(matrix.full_columns(0..4), 0);
    }

    #[test]
    fn test_overflowing_size_is_allocation_error() {
        let result = FailureMatrix::new(usize::MAX, 2);
        assert!(matches!(result, Err(Error::Allocation { .. })));
    }

    #[test]
    fn test_set_directed() {
        let mut matrix = FailureMatrix::new(3, 3).unwrap();
        matrix.set(0, 2, true, false).unwrap();

        assert_eq!(matrix.get(0, 2), Some(true));
        assert_eq!(matrix.get(2, 0), Some(false));
    }

    #[test]
    fn test_set_symmetric_mirrors() {
        let mut matrix = FailureMatrix::new(3, 3).unwrap();
        matrix.set(1, 2, true, true).unwrap();

        assert_eq!(matrix.get(1, 2), Some(true));
        assert_eq!(matrix.get(2, 1), Some(true));

        matrix.set(2, 1, false, true).unwrap();
        assert_eq!(matrix.get(1, 2), Some(false));
    }

    #[test]
    fn test_column_is_full() {
        let mut matrix = FailureMatrix::new(3, 3).unwrap();
        matrix.set(0, 1, true, false).unwrap();
        matrix.set(1, 1, true, false).unwrap();
        assert!(!matrix.column_is_full(1));

        matrix.set(2, 1, true, false).unwrap();
        assert!(matrix.column_is_full(1));
        assert_eq!(matrix.full_columns(0..3), 1);
    }

    #[test]
    fn test_fill_column_and_row() {
        let mut matrix = FailureMatrix::new(4, 4).unwrap();
        matrix.fill_column(3).unwrap();
        matrix.fill_row(0).unwrap();

        assert!(matrix.column_is_full(3));
        assert!(!matrix.column_is_full(2));
        assert!((0..4).all(|c| matrix.get(0, c) == Some(true)));
        assert_eq!(matrix.full_columns(1..4), 1);
    }

    #[test]
    fn test_out_of_bounds_cells_are_reported() {
        let mut matrix = FailureMatrix::new(2, 3).unwrap();

        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 3), None);
        assert!(!matrix.column_is_full(3));
        assert!(matches!(
            matrix.set(0, 5, true, false),
            Err(Error::CellOutOfBounds { row: 0, col: 5, .. })
        ));
        assert!(matrix.fill_column(3).is_err());
        assert!(matrix.fill_row(2).is_err());
    }

    #[test]
    fn test_failed_mirror_writes_nothing() {
        let mut matrix = FailureMatrix::new(2, 3).unwrap();

        // [2][0] does not exist in a 2x3 matrix
        assert!(matrix.set(0, 2, true, true).is_err());
        assert_eq!(matrix.get(0, 2), Some(false));
    }
}
