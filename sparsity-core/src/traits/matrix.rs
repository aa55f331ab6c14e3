//! Core matrix abstraction trait
//!
//! This module defines the fundamental interface the sparsity calculator
//! works against. Any representation that can report its shape and its
//! non-zero count qualifies, whether it stores cells, coordinates, or only
//! counts.

use super::element::MatrixElement;

/// Core sparse matrix trait for representation-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements
    ///
    /// Representations that keep a count return it directly; dense
    /// representations scan their cells.
    fn nnz(&self) -> usize;
}

impl<M: SparseMatrix + ?Sized> SparseMatrix for &M {
    type Element = M::Element;

    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element> {
        (**self).get_element(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    fn nnz(&self) -> usize {
        (**self).nnz()
    }
}
