//! Sparsity calculation
//!
//! Sparsity is the fraction of a matrix's cells that are exactly zero:
//! `(rows * cols - nnz) / (rows * cols)`. The calculation is a pure function
//! of the matrix shape and its non-zero count, so it holds no state and can
//! run concurrently on any number of independent matrices.

use crate::traits::SparseMatrix;
use crate::validation::bounds::{validate_dimensions, validate_nnz};
use crate::Result;

/// Fraction of zero-valued cells, in `[0.0, 1.0]`
///
/// Dense representations are scanned to obtain `nnz`; compressed ones
/// report their stored count without a rescan.
///
/// # Errors
///
/// - [`SparsityError::EmptyMatrix`](crate::SparsityError::EmptyMatrix) if the matrix has no cells
/// - [`SparsityError::InvalidMatrix`](crate::SparsityError::InvalidMatrix) if `nnz > rows * cols`
pub fn sparsity<M: SparseMatrix + ?Sized>(matrix: &M) -> Result<f64> {
    let (rows, cols) = matrix.dimensions();
    sparsity_from_counts(rows, cols, matrix.nnz())
}

/// Fraction of non-zero cells, `1 - sparsity`, with the same error contract
pub fn density<M: SparseMatrix + ?Sized>(matrix: &M) -> Result<f64> {
    let (rows, cols) = matrix.dimensions();
    density_from_counts(rows, cols, matrix.nnz())
}

/// Sparsity from a shape and a non-zero count
pub fn sparsity_from_counts(rows: usize, cols: usize, nnz: usize) -> Result<f64> {
    let cells = validate_dimensions(rows, cols)?;
    validate_nnz(nnz, rows, cols)?;
    let zeros = cells - nnz as u128;
    Ok(zeros as f64 / cells as f64)
}

/// Density from a shape and a non-zero count
pub fn density_from_counts(rows: usize, cols: usize, nnz: usize) -> Result<f64> {
    let cells = validate_dimensions(rows, cols)?;
    validate_nnz(nnz, rows, cols)?;
    Ok(nnz as f64 / cells as f64)
}

/// A matrix known only by its shape and non-zero count
///
/// Useful when the count comes from metadata (e.g. a Matrix Market
/// coordinate size line) and the entries themselves are not needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixShape {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
}

impl MatrixShape {
    pub const fn new(rows: usize, cols: usize, nnz: usize) -> Self {
        Self { rows, cols, nnz }
    }

    /// Capture the shape and count of any matrix
    pub fn of<M: SparseMatrix + ?Sized>(matrix: &M) -> Self {
        let (rows, cols) = matrix.dimensions();
        Self::new(rows, cols, matrix.nnz())
    }
}

impl SparseMatrix for MatrixShape {
    type Element = f64;

    fn get_element(&self, _row: usize, _col: usize) -> Option<f64> {
        None
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.nnz
    }
}

/// Sparsity together with the figures it was derived from
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparsityReport {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    pub sparsity: f64,
    pub density: f64,
}

impl SparsityReport {
    /// Compute a report; `nnz` is obtained exactly once
    pub fn from_matrix<M: SparseMatrix + ?Sized>(matrix: &M) -> Result<Self> {
        Self::from_shape(MatrixShape::of(matrix))
    }

    pub fn from_shape(shape: MatrixShape) -> Result<Self> {
        let MatrixShape { rows, cols, nnz } = shape;
        Ok(Self {
            rows,
            cols,
            nnz,
            sparsity: sparsity_from_counts(rows, cols, nnz)?,
            density: density_from_counts(rows, cols, nnz)?,
        })
    }

    /// Number of zero-valued cells
    pub fn zeros(&self) -> u128 {
        crate::validation::cell_count(self.rows, self.cols) - self.nnz as u128
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparsityError;

    #[test]
    fn test_fully_dense_and_all_zero() {
        assert_eq!(sparsity_from_counts(3, 4, 12), Ok(0.0));
        assert_eq!(sparsity_from_counts(3, 4, 0), Ok(1.0));
        assert_eq!(density_from_counts(3, 4, 12), Ok(1.0));
    }

    #[test]
    fn test_one_percent_density() {
        assert_eq!(sparsity_from_counts(1000, 1000, 10_000), Ok(0.99));
        assert_eq!(density_from_counts(1000, 1000, 10_000), Ok(0.01));
    }

    #[test]
    fn test_empty_matrix() {
        assert_eq!(
            sparsity(&MatrixShape::new(0, 0, 0)),
            Err(SparsityError::EmptyMatrix { rows: 0, cols: 0 })
        );
        assert_eq!(
            sparsity(&MatrixShape::new(7, 0, 0)),
            Err(SparsityError::EmptyMatrix { rows: 7, cols: 0 })
        );
        assert!(density(&MatrixShape::new(0, 3, 0)).is_err());
    }

    #[test]
    fn test_nnz_exceeding_cells() {
        assert_eq!(
            sparsity(&MatrixShape::new(2, 2, 5)),
            Err(SparsityError::InvalidMatrix {
                nnz: 5,
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn test_huge_dimensions_do_not_overflow() {
        let value = sparsity(&MatrixShape::new(usize::MAX, usize::MAX, usize::MAX)).unwrap();
        assert!(value > 0.999_999 && value <= 1.0);
    }

    #[test]
    fn test_report() {
        let report = SparsityReport::from_shape(MatrixShape::new(10, 10, 25)).unwrap();
        assert_eq!(report.sparsity, 0.75);
        assert_eq!(report.density, 0.25);
        assert_eq!(report.zeros(), 75);
    }

    #[test]
    fn test_sparsity_through_reference() {
        let shape = MatrixShape::new(4, 5, 2);
        let by_ref: &dyn SparseMatrix<Element = f64> = &shape;
        assert_eq!(sparsity(by_ref), Ok(0.9));
    }
}
