//! Concrete matrix representations (requires the `alloc` feature)
//!
//! A [`Matrix`] is either dense (every cell stored) or compressed (only
//! non-zero entries stored). Both describe the same logical object; the
//! variant only decides how `nnz` is obtained.

pub mod compressed;
pub mod dense;

pub use compressed::CompressedMatrix;
pub use dense::DenseMatrix;

use crate::traits::{MatrixElement, SparseMatrix};
use crate::Result;

/// A matrix in one of its two storage representations
#[derive(Debug, Clone, PartialEq)]
pub enum Matrix<T> {
    Dense(DenseMatrix<T>),
    Compressed(CompressedMatrix<T>),
}

impl<T: MatrixElement> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.dimensions().0
    }

    pub fn cols(&self) -> usize {
        self.dimensions().1
    }

    pub fn is_dense(&self) -> bool {
        matches!(self, Matrix::Dense(_))
    }

    /// Convert to dense storage, materializing zeros
    pub fn into_dense(self) -> Result<DenseMatrix<T>> {
        match self {
            Matrix::Dense(m) => Ok(m),
            Matrix::Compressed(m) => m.to_dense(),
        }
    }

    /// Convert to compressed storage, dropping zeros
    pub fn into_compressed(self) -> CompressedMatrix<T> {
        match self {
            Matrix::Dense(m) => m.to_compressed(),
            Matrix::Compressed(m) => m,
        }
    }
}

impl<T: MatrixElement> SparseMatrix for Matrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        match self {
            Matrix::Dense(m) => m.get_element(row, col),
            Matrix::Compressed(m) => m.get_element(row, col),
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        match self {
            Matrix::Dense(m) => m.dimensions(),
            Matrix::Compressed(m) => m.dimensions(),
        }
    }

    fn nnz(&self) -> usize {
        // Dense storage is scanned; compressed storage already knows its count.
        match self {
            Matrix::Dense(m) => m.count_nonzero(),
            Matrix::Compressed(m) => m.nnz(),
        }
    }
}

impl<T> From<DenseMatrix<T>> for Matrix<T> {
    fn from(m: DenseMatrix<T>) -> Self {
        Matrix::Dense(m)
    }
}

impl<T> From<CompressedMatrix<T>> for Matrix<T> {
    fn from(m: CompressedMatrix<T>) -> Self {
        Matrix::Compressed(m)
    }
}
