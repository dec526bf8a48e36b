//! `Matrix` — a dense, row-major 2D table that can grow and shrink in place.
//!
//! Storage is one contiguous `Vec<T>` of `rows * cols` cells, so a full row is
//! a plain slice. [`Matrix::resize`] rebuilds the buffer, keeping every cell
//! that lies inside both the old and the new shape.

use core::iter;

/// A dense row-major matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Creates an empty `0 x 0` matrix.
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Creates a `rows x cols` matrix with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix from row-major data.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "Vector length must match dimensions");
        Self { data, rows, cols }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at (row, col).
    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Reshapes to `rows x cols`.
    ///
    /// Cells inside both shapes keep their value and position; every newly
    /// created cell, including whole new rows and columns, is set to `fill`.
    /// Cells outside the new shape are dropped.
    pub fn resize(&mut self, rows: usize, cols: usize, fill: T)
    where
        T: Clone,
    {
        if rows == self.rows && cols == self.cols {
            return;
        }

        let old_rows = self.rows;
        let old_cols = self.cols;
        let kept_cols = cols.min(old_cols);

        let mut data = Vec::with_capacity(rows * cols);
        let mut old = core::mem::take(&mut self.data).into_iter();
        for row in 0..rows {
            if row < old_rows {
                data.extend(old.by_ref().take(kept_cols));
                old.by_ref().take(old_cols - kept_cols).for_each(drop);
                data.extend(iter::repeat(fill.clone()).take(cols - kept_cols));
            } else {
                data.extend(iter::repeat(fill.clone()).take(cols));
            }
        }

        self.data = data;
        self.rows = rows;
        self.cols = cols;
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}
