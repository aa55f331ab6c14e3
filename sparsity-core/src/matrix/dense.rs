//! Dense row-major matrix storage

use alloc::vec;
use alloc::vec::Vec;

use super::compressed::CompressedMatrix;
use crate::traits::{MatrixElement, SparseMatrix};
use crate::validation::bounds::{buffer_len, validate_buffer_len, validate_index};
use crate::Result;

/// Matrix with every cell materialized, zero or not
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    rows: usize,
    cols: usize,
    /// Row-major cells, `rows * cols` long
    cells: Vec<T>,
}

impl<T: MatrixElement> DenseMatrix<T> {
    /// Wrap a row-major buffer
    pub fn new(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self> {
        validate_buffer_len(cells.len(), rows, cols)?;
        Ok(Self { rows, cols, cells })
    }

    /// All-zero matrix
    ///
    /// Fails with [`SparsityError::DimensionOverflow`](crate::SparsityError::DimensionOverflow)
    /// if `rows * cols` does not fit in `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = buffer_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![T::zero(); len],
        })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows.saturating_mul(cols));
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Wrap a column-major buffer (the order Matrix Market array files use)
    pub fn from_column_major(rows: usize, cols: usize, values: Vec<T>) -> Result<Self> {
        validate_buffer_len(values.len(), rows, cols)?;
        Ok(Self::from_fn(rows, cols, |row, col| values[col * rows + row]))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of every cell
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Get the value at a position, including zeros
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Overwrite the value at a position
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validate_index(row, col, self.rows, self.cols)?;
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    /// Count non-zero cells by scanning the whole buffer
    pub fn count_nonzero(&self) -> usize {
        self.cells.iter().filter(|value| !value.is_zero()).count()
    }

    /// Iterate over non-zero cells as `(row, col, value)` in row-major order
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .map(move |(i, &value)| (i / cols, i % cols, value))
    }

    /// Iterate over every cell in column-major order
    pub fn iter_column_major(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.cols)
            .flat_map(move |col| (0..self.rows).map(move |row| self.cells[row * self.cols + col]))
    }

    /// Copy the non-zero cells into coordinate storage
    pub fn to_compressed(&self) -> CompressedMatrix<T> {
        let mut row_indices = Vec::new();
        let mut col_indices = Vec::new();
        let mut values = Vec::new();
        for (row, col, value) in self.iter_nonzero() {
            row_indices.push(row);
            col_indices.push(col);
            values.push(value);
        }
        CompressedMatrix::from_sorted_parts(self.rows, self.cols, row_indices, col_indices, values)
    }
}

impl<T: MatrixElement> SparseMatrix for DenseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.get(row, col).filter(|value| !value.is_zero())
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.count_nonzero()
    }
}
