//! Coordinate (COO) storage holding only non-zero entries

use alloc::vec::Vec;
use hashbrown::hash_map::{Entry, HashMap};
use hashbrown::HashSet;

use super::dense::DenseMatrix;
use crate::traits::{MatrixElement, SparseMatrix};
use crate::validation::bounds::{validate_index, validate_nnz};
use crate::{Result, SparsityError};

/// Matrix storing only its non-zero entries as `(row, col, value)` triples
///
/// The stored entry count is the matrix's `nnz`; it is never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedMatrix<T> {
    rows: usize,
    cols: usize,
    row_indices: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: MatrixElement> CompressedMatrix<T> {
    /// Matrix with no stored entries (all zero)
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_indices: Vec::new(),
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build from zero-based triples
    ///
    /// Positions are bounds checked. Explicit zeros are dropped and repeated
    /// positions are summed, so the result holds each non-zero cell exactly
    /// once, sorted by (row, col).
    pub fn try_from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut slots: HashMap<(usize, usize), usize> = HashMap::new();
        let mut entries: Vec<(usize, usize, T)> = Vec::new();

        for (row, col, value) in triplets {
            validate_index(row, col, rows, cols)?;
            match slots.entry((row, col)) {
                Entry::Occupied(slot) => {
                    let existing = &mut entries[*slot.get()].2;
                    *existing = existing.accumulate(value);
                }
                Entry::Vacant(slot) => {
                    slot.insert(entries.len());
                    entries.push((row, col, value));
                }
            }
        }

        entries.retain(|&(_, _, value)| !value.is_zero());
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));

        let mut row_indices = Vec::with_capacity(entries.len());
        let mut col_indices = Vec::with_capacity(entries.len());
        let mut values = Vec::with_capacity(entries.len());
        for (row, col, value) in entries {
            row_indices.push(row);
            col_indices.push(col);
            values.push(value);
        }

        Ok(Self::from_sorted_parts(rows, cols, row_indices, col_indices, values))
    }

    /// Wrap parallel index/value arrays as-is
    ///
    /// Only the array lengths are checked. Bounds, repeated positions,
    /// stored zeros and the `nnz <= rows * cols` invariant are left to
    /// [`CompressedMatrix::validate`] and to the sparsity calculator, which
    /// report them instead of correcting them.
    pub fn from_raw_parts(
        rows: usize,
        cols: usize,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        if row_indices.len() != values.len() {
            return Err(SparsityError::DimensionMismatch {
                expected: values.len(),
                actual: row_indices.len(),
            });
        }
        if col_indices.len() != values.len() {
            return Err(SparsityError::DimensionMismatch {
                expected: values.len(),
                actual: col_indices.len(),
            });
        }
        Ok(Self::from_sorted_parts(rows, cols, row_indices, col_indices, values))
    }

    pub(crate) fn from_sorted_parts(
        rows: usize,
        cols: usize,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        Self {
            rows,
            cols,
            row_indices,
            col_indices,
            values,
        }
    }

    /// Check that the stored entries describe a well-formed matrix
    ///
    /// Every entry must lie inside the matrix, hold a non-zero value and
    /// occupy a position no other entry uses. Only then does the stored
    /// count equal the number of non-zero cells.
    pub fn validate(&self) -> Result<()> {
        validate_nnz(self.nnz(), self.rows, self.cols)?;
        let mut seen = HashSet::with_capacity(self.nnz());
        for (row, col, value) in self.iter() {
            validate_index(row, col, self.rows, self.cols)?;
            if value.is_zero() {
                return Err(SparsityError::StoredZero { row, col });
            }
            if !seen.insert((row, col)) {
                return Err(SparsityError::DuplicateEntry { row, col });
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Look up a position; O(nnz)
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.iter()
            .find(|&(r, c, _)| r == row && c == col)
            .map(|(_, _, value)| value)
    }

    /// Iterate over stored entries as `(row, col, value)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.row_indices
            .iter()
            .zip(&self.col_indices)
            .zip(&self.values)
            .map(|((&row, &col), &value)| (row, col, value))
    }

    /// Materialize every cell
    ///
    /// Fails on out-of-bounds entries or when the cells cannot be
    /// addressed; repeated positions are summed.
    pub fn to_dense(&self) -> Result<DenseMatrix<T>> {
        let mut dense = DenseMatrix::<T>::zeros(self.rows, self.cols)?;
        for (row, col, value) in self.iter() {
            let current = dense.get(row, col).ok_or(SparsityError::IndexOutOfBounds { row, col })?;
            dense.set(row, col, current.accumulate(value))?;
        }
        Ok(dense)
    }
}

impl<T: MatrixElement> SparseMatrix for CompressedMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.get(row, col).filter(|value| !value.is_zero())
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_try_from_triplets_sorts_and_drops_zeros() {
        let m = CompressedMatrix::try_from_triplets(
            3,
            3,
            vec![(2, 1, 4.0), (0, 0, 1.0), (1, 1, 0.0), (0, 2, 2.0)],
        )
        .unwrap();
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.row_indices(), &[0, 0, 2]);
        assert_eq!(m.col_indices(), &[0, 2, 1]);
        assert_eq!(m.values(), &[1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_try_from_triplets_coalesces_duplicates() {
        let m = CompressedMatrix::try_from_triplets(
            2,
            2,
            vec![(0, 0, 1), (0, 0, 2), (1, 1, 5), (1, 1, -5)],
        )
        .unwrap();
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(0, 0), Some(3));
        assert_eq!(m.get(1, 1), None);
    }

    #[test]
    fn test_try_from_triplets_rejects_out_of_bounds() {
        let result = CompressedMatrix::try_from_triplets(2, 2, vec![(0, 2, 1.0)]);
        assert_eq!(result, Err(SparsityError::IndexOutOfBounds { row: 0, col: 2 }));
    }

    #[test]
    fn test_from_raw_parts_checks_lengths_only() {
        assert_eq!(
            CompressedMatrix::from_raw_parts(2, 2, vec![0, 1], vec![0], vec![1.0, 2.0]),
            Err(SparsityError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );

        let oversized =
            CompressedMatrix::from_raw_parts(2, 2, vec![0; 5], vec![0; 5], vec![1.0; 5]).unwrap();
        assert_eq!(oversized.nnz(), 5);
        assert_eq!(
            oversized.validate(),
            Err(SparsityError::InvalidMatrix {
                nnz: 5,
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn test_validate_reports_out_of_bounds() {
        let m = CompressedMatrix::from_raw_parts(2, 2, vec![3], vec![0], vec![1.0]).unwrap();
        assert_eq!(
            m.validate(),
            Err(SparsityError::IndexOutOfBounds { row: 3, col: 0 })
        );
        assert!(m.to_dense().is_err());
    }

    #[test]
    fn test_validate_rejects_repeated_positions() {
        let m = CompressedMatrix::from_raw_parts(2, 2, vec![0, 0, 0], vec![0, 0, 0], vec![1, 1, 1])
            .unwrap();
        assert_eq!(m.validate(), Err(SparsityError::DuplicateEntry { row: 0, col: 0 }));

        // The stored count overstates the non-zero cells.
        assert_eq!(crate::sparsity(&m), Ok(0.25));
        assert_eq!(crate::sparsity(&m.to_dense().unwrap()), Ok(0.75));
    }

    #[test]
    fn test_validate_rejects_stored_zeros() {
        let m = CompressedMatrix::from_raw_parts(1, 2, vec![0], vec![1], vec![0.0]).unwrap();
        assert_eq!(m.validate(), Err(SparsityError::StoredZero { row: 0, col: 1 }));
        assert_eq!(crate::sparsity(&m.to_dense().unwrap()), Ok(1.0));
    }

    #[test]
    fn test_validate_accepts_well_formed_storage() {
        let m = CompressedMatrix::from_raw_parts(2, 2, vec![1, 0], vec![0, 1], vec![3, -2]).unwrap();
        assert_eq!(m.validate(), Ok(()));
        assert_eq!(crate::sparsity(&m), crate::sparsity(&m.to_dense().unwrap()));
    }

    #[test]
    fn test_to_dense_rejects_overflowing_dimensions() {
        let m = CompressedMatrix::<f64>::new(usize::MAX, 2);
        assert_eq!(
            m.to_dense(),
            Err(SparsityError::DimensionOverflow {
                rows: usize::MAX,
                cols: 2
            })
        );
    }

    #[test]
    fn test_to_dense() {
        let m = CompressedMatrix::try_from_triplets(2, 3, vec![(0, 1, 7), (1, 2, 8)]).unwrap();
        let dense = m.to_dense().unwrap();
        assert_eq!(dense.as_slice(), &[0, 7, 0, 0, 0, 8]);
        assert_eq!(dense.to_compressed(), m);
    }
}
